#![allow(unused)]

macro_rules! trace { ($($x:tt)*) => (
    #[cfg(feature = "log")]
    log::trace!($($x)*);

    #[cfg(not(feature = "log"))]
    let _ = || { let _ = format_args!($($x)*); };
) }

macro_rules! debug { ($($x:tt)*) => (
    #[cfg(feature = "log")]
    log::debug!($($x)*);

    #[cfg(not(feature = "log"))]
    let _ = || { let _ = format_args!($($x)*); };
) }
