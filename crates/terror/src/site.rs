use std::fmt;

/// Source location where an error was created
///
/// Captured at compile time by [`site!`](crate::site) so it always names the
/// code that invoked a constructor, regardless of optimization level or how
/// many helpers sit between that code and the annotator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Site {
    function: &'static str,
    file: &'static str,
    line: u32,
}

impl Site {
    /// Create a site from its parts
    ///
    /// Prefer the [`site!`](crate::site) macro, which fills these in.
    pub const fn new(function: &'static str, file: &'static str, line: u32) -> Self {
        Self { function, file, line }
    }

    /// Fully qualified name of the enclosing function
    pub const fn function(&self) -> &'static str {
        self.function
    }

    /// Source file path, as reported by `file!()`
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Source line
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}:{}]", self.function, self.file, self.line)
    }
}

/// Reduce the type name of a marker fn to the path of its enclosing function
#[doc(hidden)]
pub fn enclosing_function(marker: &'static str) -> &'static str {
    let mut name = marker.strip_suffix("::terror_site_marker").unwrap_or(marker);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}

/// Fully qualified path of the function this macro is expanded in
///
/// Closure frames are skipped, so inside a closure or `async` block the
/// result is the function that contains it.
///
/// Built on the output of `std::any::type_name_of_val`, whose format std
/// does not guarantee. A toolchain that changes it changes these names; the
/// tests asserting on qualified names are what catch that.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn terror_site_marker() {}
        $crate::enclosing_function(::std::any::type_name_of_val(&terror_site_marker))
    }};
}

/// Capture the current call site as a [`Site`]
#[macro_export]
macro_rules! site {
    () => {
        $crate::Site::new($crate::function_name!(), file!(), line!())
    };
}
