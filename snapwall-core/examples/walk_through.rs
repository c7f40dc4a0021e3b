use snapwall::{Point, Rect, Session, SessionOpts, Size, TestPattern, TimeMs};

fn main() {
    if let Err(e) = try_main() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let feed = TestPattern::new(1280, 720)?;
    let mut session = Session::open(
        SessionOpts {
            locale: "ja".to_string(),
            seed: 7,
        },
        &feed,
    )?;

    // Press the shutter, let the photo eject and develop.
    let id = session
        .capture()?
        .expect("an idle session admits the first capture");
    session.advance_to(TimeMs(1_000));
    eprintln!("after eject: {:?}", session.phase());
    session.advance_to(TimeMs(3_000));
    eprintln!("after develop: {:?}", session.phase());

    // Drag the developed photo onto the wall.
    session.begin_drag(
        id,
        Point::new(10.0, 10.0),
        Rect::from_origin_size(Point::ZERO, Size::new(200.0, 266.0)),
    );
    session.update_drag(Point::new(430.0, 250.0));
    session.end_drag()?;

    println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    Ok(())
}
