pub mod machine;
pub mod timers;
