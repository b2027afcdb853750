use stopwatch_registry::{
    Command, ManualClock, MinuteField, Reply, Settings, TimeFormat, TimeSpan, TimerRegistry,
    DEFAULT_TIMER_NAME,
};

#[test]
fn omitted_names_use_the_default_timer() {
    let clock = ManualClock::new();
    let mut registry = TimerRegistry::with_clock(clock.clone());

    assert_eq!(registry.execute(Command::Start(None)), Reply::Done);
    clock.advance(TimeSpan::from_seconds(4.0));

    assert_eq!(registry.time_seconds(DEFAULT_TIMER_NAME), 4);
    assert_eq!(
        registry.execute(Command::GetTimeSeconds(Some("principal"))),
        Reply::Number(4),
    );
    assert_eq!(registry.execute(Command::IsRunning(None)), Reply::Boolean(true));
    assert_eq!(registry.execute(Command::IsRunning(Some("other"))), Reply::Boolean(false));
}

#[test]
fn every_command_reaches_the_registry() {
    let clock = ManualClock::new();
    let mut registry = TimerRegistry::with_clock(clock.clone());
    let name = Some("n");

    registry.execute(Command::Start(name));
    clock.advance(TimeSpan::from_seconds(30.0));
    registry.execute(Command::Pause(name));
    assert_eq!(registry.execute(Command::IsPaused(name)), Reply::Boolean(true));

    clock.advance(TimeSpan::from_seconds(30.0));
    registry.execute(Command::Resume(name));
    registry.execute(Command::AddTime(name, TimeSpan::from_seconds(45.0)));
    assert_eq!(registry.execute(Command::GetMinutes(name)), Reply::Number(1));
    assert_eq!(registry.execute(Command::GetSecondsOnly(name)), Reply::Number(15));

    registry.execute(Command::Stop(name));
    assert_eq!(registry.execute(Command::IsRunning(name)), Reply::Boolean(false));

    registry.execute(Command::SetTime(name, TimeSpan::from_seconds(3661.0)));
    assert_eq!(
        registry.execute(Command::GetTimeFormatted(name, Some(TimeFormat::HoursMinutesSeconds))),
        Reply::Text("01:01:01".into()),
    );

    registry.execute(Command::Reset(name));
    assert_eq!(registry.execute(Command::GetTimeSeconds(name)), Reply::Number(0));
}

#[test]
fn omitted_formats_use_the_settings() {
    let settings = Settings {
        default_timer_name: "main".into(),
        default_format: TimeFormat::MinutesSeconds,
        minute_field: MinuteField::WithinHour,
    };
    let mut registry = TimerRegistry::with_settings(ManualClock::new(), settings);

    registry.execute(Command::SetTime(None, TimeSpan::from_seconds(3725.0)));
    assert_eq!(registry.time_seconds("main"), 3725);
    assert_eq!(
        registry.execute(Command::GetTimeFormatted(None, None)),
        Reply::Text("2:05".into()),
    );
    assert_eq!(
        registry.execute(Command::GetTimeFormatted(None, Some(TimeFormat::from_menu_item("??")))),
        Reply::Text("02:05".into()),
    );
}

#[test]
fn replies_render_as_text() {
    assert_eq!(Reply::Done.to_string(), "");
    assert_eq!(Reply::Number(-6).to_string(), "-6");
    assert_eq!(Reply::Text("01:30".into()).to_string(), "01:30");
    assert_eq!(Reply::Boolean(true).to_string(), "true");
}
