//! Template-literal macros over the registration pipeline.
//!
//! A style template is a sequence of string-literal parts with `{ expr }`
//! interpolations between them; anything `Display` interpolates.

/// Registers a style block and returns a [`ScopedClass`](crate::ScopedClass)
/// bound to the generated class name.
///
/// ```
/// let color = "dimgrey";
/// let label = cssink::css!("&& { font-family: system-ui; color: " { color } "; }").unwrap();
/// let class_attr = label.apply(&["Label".into()]);
/// # assert!(class_attr.ends_with(" Label"));
/// ```
///
/// `css!(in registry; ...)` targets an explicit
/// [`StyleRegistry`](crate::StyleRegistry) instead of the ambient one.
#[macro_export]
macro_rules! css {
    (in $registry:expr; $($part:literal $({ $value:expr })?)+) => {
        ($registry).css(
            &[$($part),+],
            &[$($(&$value as &dyn ::core::fmt::Display,)?)+],
        )
    };
    ($($part:literal $({ $value:expr })?)+) => {
        $crate::with_registry(|registry| $crate::css!(in registry; $($part $({ $value })?)+))
    };
}

/// Registers a style block and returns only the generated class name.
///
/// Same template grammar and `in registry;` form as [`css!`].
#[macro_export]
macro_rules! css_rules {
    (in $registry:expr; $($part:literal $({ $value:expr })?)+) => {
        ($registry).register_style(
            &[$($part),+],
            &[$($(&$value as &dyn ::core::fmt::Display,)?)+],
        )
    };
    ($($part:literal $({ $value:expr })?)+) => {
        $crate::with_registry(|registry| $crate::css_rules!(in registry; $($part $({ $value })?)+))
    };
}

/// Assembles a class string from literals and `{ "name" => flag }` maps.
///
/// ```
/// let selected = true;
/// let class = cssink::class_names!["Item", { "isSelected" => selected, "isOpen" => false }];
/// assert_eq!(class, "Item isSelected");
/// ```
#[macro_export]
macro_rules! class_names {
    () => {
        ::std::string::String::new()
    };
    ($($fragment:tt),+ $(,)?) => {
        $crate::class_names(&[$($crate::__class_fragment!($fragment)),+])
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __class_fragment {
    ({ $($name:literal => $flag:expr),* $(,)? }) => {
        $crate::ClassFragment::Flags(&[$(($name, $flag)),*])
    };
    ($value:expr) => {
        $crate::ClassFragment::from($value)
    };
}

/// Registers a style block and wraps it for an element: `selector =>
/// template`. See [`styled`](crate::styled()).
///
/// ```
/// let button = cssink::styled!("button.Btn" => "color: white; background: dodgerblue;").unwrap();
/// assert_eq!(button.tag(), "button");
/// ```
#[macro_export]
macro_rules! styled {
    ($selector:expr => $($part:literal $({ $value:expr })?)+) => {
        $crate::styled(
            $selector,
            &[$($part),+],
            &[$($(&$value as &dyn ::core::fmt::Display,)?)+],
        )
    };
}
