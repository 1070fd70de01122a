use pretty_assertions::assert_eq;

use cssink::{
    AppendStrategy, Backend, Capabilities, ConfigUpdate, FakeClock, ManualScheduler, MemorySink,
    StyleRegistry,
};

fn registry() -> (StyleRegistry, MemorySink, ManualScheduler) {
    let sink = MemorySink::new();
    let scheduler = ManualScheduler::new();
    let backend = Backend {
        clock: Box::new(FakeClock::at(1_000)),
        scheduler: Box::new(scheduler.clone()),
        sink: Box::new(sink.clone()),
        capabilities: Capabilities::default(),
    };
    let registry = StyleRegistry::new(backend);
    registry.configure(ConfigUpdate::new().append(AppendStrategy::Each));
    (registry, sink, scheduler)
}

#[test]
fn css_macro_interleaves_parts_and_interpolations() {
    let (registry, sink, _) = registry();
    let (bg, fg) = ("red", "white");

    let style = cssink::css!(in &registry;
        "&& { background-color: " { bg } "; color: " { fg } "; }"
    )
    .unwrap();

    let inserted = sink.inserted();
    assert_eq!(inserted.len(), 1);
    assert_eq!(
        inserted[0].css,
        format!(
            ".{} {{ background-color: red; color: white; }}",
            style.name()
        )
    );
}

#[test]
fn css_macro_without_interpolations() {
    let (registry, sink, _) = registry();

    let style = cssink::css!(in &registry; "&& { background-color: red; }").unwrap();

    assert!(style.name().starts_with("css_"));
    assert_eq!(sink.count(), 1);
}

#[test]
fn css_rules_macro_returns_the_class_name() {
    let (registry, sink, _) = registry();

    let class = cssink::css_rules!(in &registry; "&& { margin: " { 4 } "px; }").unwrap();

    assert!(class.starts_with("css_"));
    assert_eq!(
        sink.inserted()[0].css,
        format!(".{class} {{ margin: 4px; }}")
    );
}

#[test]
fn batched_macro_registrations_flush_once() {
    let (registry, sink, scheduler) = registry();
    registry.configure(ConfigUpdate::new().append(AppendStrategy::Batch));

    let first = cssink::css_rules!(in &registry; "&& { color: red; }").unwrap();
    let second = cssink::css_rules!(in &registry; "&& { color: blue; }").unwrap();

    assert_eq!(sink.count(), 0);
    scheduler.run_pending();

    let inserted = sink.inserted();
    assert_eq!(inserted.len(), 1);
    assert_eq!(
        inserted[0].css,
        format!(".{first} {{ color: red; }}\n.{second} {{ color: blue; }}")
    );
}

#[test]
fn class_names_macro_mixes_literals_and_flags() {
    assert_eq!(cssink::class_names!(), "");
    assert_eq!(cssink::class_names!("foo", "bar", "baz"), "foo bar baz");

    let selected = true;
    assert_eq!(
        cssink::class_names!("foo", { "bar" => selected, "baz" => false, "qux" => true }),
        "foo bar qux"
    );
    assert_eq!(cssink::class_names!("foo", None, "bar"), "foo bar");
}

#[test]
fn scoped_handle_round_trip_through_macro() {
    let (registry, _, _) = registry();

    let style = cssink::css!(in &registry; "&& { color: red; }").unwrap();
    let base = style.name().to_string();

    assert_eq!(style.apply(&[]), base);
    assert_eq!(style.apply(&["Test".into()]), format!("{base} Test"));

    let flags: &[(&str, bool)] = &[("isSelected", true), ("isReadonly", false)];
    assert_eq!(
        style.apply(&["Test".into(), flags.into()]),
        format!("{base} Test isSelected")
    );
    assert_eq!(
        style.inner(&["Test".into(), flags.into()]),
        "Test isSelected"
    );
}

#[test]
fn styled_macro_builds_an_element_wrapper() {
    let button = cssink::styled!("button.Btn" =>
        "color: white; background: " { "dodgerblue" } ";"
    )
    .unwrap();

    assert_eq!(button.tag(), "button");
    let attr = button.class_attr(Some("Mine"), &[("isOutline", true)]);
    assert!(attr.ends_with("Mine Btn isOutline"));
    assert!(attr.starts_with("css_"));
}

#[test]
fn ambient_entry_points_are_usable() {
    // The ambient registry collects into memory off-browser; these only
    // assert the returned values, since global state is shared per thread.
    let class = cssink::css_rules(&["&& { color: red; }"], &[]).unwrap();
    assert!(class.starts_with("css_"));

    let style = cssink::css!("&& { color: blue; }").unwrap();
    assert!(style.name().starts_with("css_"));

    let handle = cssink::class_builder("base");
    assert_eq!(handle.apply(&["Test".into()]), "base Test");

    let a = cssink::uid();
    let b = cssink::uid();
    assert_ne!(a, b);
}
