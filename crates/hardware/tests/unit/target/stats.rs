//! Dispatch Counter Unit Tests.

use cosim_core::common::{SimClock, SimTime};
use cosim_core::config::Config;
use cosim_core::protocol::{Command, Frame, Payload};
use cosim_core::target::Target;

#[test]
fn stats_count_per_command_and_time() {
    let mut target = Target::new(&Config::default());
    let mut clock = SimClock::new();
    for (command, x, y) in [
        (Command::Add, 1, 2),
        (Command::Add, 3, 4),
        (Command::Rem, 9, 2),
    ] {
        let mut payload = Payload::new(command, x, y);
        let _ = target.dispatch(&mut payload, &mut clock).unwrap();
    }
    let stats = target.stats();
    assert_eq!(stats.dispatched, 3);
    assert_eq!(stats.count_for(Command::Add), 2);
    assert_eq!(stats.count_for(Command::Rem), 1);
    assert_eq!(stats.count_for(Command::Sub), 0);
    assert_eq!(stats.errors, 0);
    assert_eq!(stats.time_consumed, SimTime::new(10 + 10 + 15));
}

#[test]
fn stats_count_rejections() {
    let mut target = Target::new(&Config::default());
    let mut clock = SimClock::new();

    let mut payload = Payload::new(Command::Rem, 1, 0);
    assert!(target.dispatch(&mut payload, &mut clock).is_err());

    let mut frame = Frame::full_width(vec![8, 0, 0]);
    assert!(target.dispatch_frame(&mut frame, &mut clock).is_err());

    let stats = target.stats();
    assert_eq!(stats.dispatched, 0);
    assert_eq!(stats.errors, 2);
    assert_eq!(stats.time_consumed, SimTime::ZERO);
}
