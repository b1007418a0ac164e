// Every log line of this crate goes through `wlog!` so the target stays in one place.
#[cfg(feature = "tracing")]
macro_rules! wlog {
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: "infinite_window", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! wlog {
    ($level:ident, $($tt:tt)*) => {};
}

macro_rules! wtrace {
    ($($tt:tt)*) => { wlog!(trace, $($tt)*) };
}

macro_rules! wdebug {
    ($($tt:tt)*) => { wlog!(debug, $($tt)*) };
}

macro_rules! wwarn {
    ($($tt:tt)*) => { wlog!(warn, $($tt)*) };
}
