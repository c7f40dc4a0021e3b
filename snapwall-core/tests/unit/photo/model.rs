use super::*;

fn photo(id: u64) -> Photo {
    Photo::new(
        PhotoId(id),
        ImageData::new(vec![1, 2, 3]),
        "hello".to_string(),
    )
}

#[test]
fn new_photo_starts_developing_at_origin() {
    let p = photo(1);
    assert_eq!(p.id(), PhotoId(1));
    assert_eq!(p.position(), Point::ZERO);
    assert!(p.is_developing());
    assert_eq!(p.caption(), "hello");
    assert_eq!(p.image().as_bytes(), &[1, 2, 3]);
}

#[test]
fn wall_preserves_insertion_order() {
    let mut wall = Wall::new();
    for id in [3, 1, 2] {
        wall.push(photo(id)).unwrap();
    }
    let ids: Vec<u64> = wall.iter().map(|p| p.id().0).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert_eq!(wall.len(), 3);
}

#[test]
fn wall_rejects_duplicate_ids() {
    let mut wall = Wall::new();
    wall.push(photo(7)).unwrap();
    let err = wall.push(photo(7)).unwrap_err();
    assert!(err.to_string().contains("validation error:"));
    assert_eq!(wall.len(), 1);
}

#[test]
fn wall_lookup_by_id() {
    let mut wall = Wall::new();
    wall.push(photo(1)).unwrap();
    wall.push(photo(2)).unwrap();
    assert_eq!(wall.get(PhotoId(2)).map(|p| p.id()), Some(PhotoId(2)));
    assert!(wall.get(PhotoId(9)).is_none());
}

#[test]
fn image_data_debug_hides_payload() {
    let data = ImageData::new(vec![0; 1024]);
    assert_eq!(format!("{data:?}"), "ImageData(1024 bytes)");
}
