//! Internal declarative macros.
//!
//! - `dispatch_object!` declares an algorithm's zero-sized type, its
//!   [`Algorithm`](crate::dispatch::Algorithm) impl and its constant.
//! - `trace_event!` forwards to `tracing::trace!` when the `tracing` feature
//!   is on and expands to nothing otherwise.
//! - `debug_event!` is the same for `tracing::debug!`.

// =============================================================================
// dispatch_object! - Declare a dispatch object
// =============================================================================

/// Declare a dispatch object.
///
/// # Example
///
/// ```ignore
/// dispatch_object! {
///     /// Copies a range backward.
///     pub struct CopyBackwardFn => COPY_BACKWARD = "copy_backward";
/// }
///
/// COPY_BACKWARD.cursors(begin, end, out);
/// ```
macro_rules! dispatch_object {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident => $konst:ident = $label:literal;
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::dispatch::Algorithm for $name {
            const NAME: &'static str = $label;
        }

        #[doc = concat!("The `", $label, "` dispatch object. See [`", stringify!($name), "`].")]
        $vis const $konst: $name = $name;
    };
}

// =============================================================================
// trace_event! / debug_event! - Optional tracing
// =============================================================================

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($arg:tt)*) => {
        ::tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(feature = "tracing")]
macro_rules! debug_event {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_event {
    ($($arg:tt)*) => {
        ()
    };
}
