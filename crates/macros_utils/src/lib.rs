//! Small declarative helpers shared by the HTTP apps.

#[cfg(feature = "actix")]
#[doc(hidden)]
pub mod __private {
    pub use actix_web::web::ServiceConfig;
}

/// Generates a `pub fn routes(cfg: &mut ServiceConfig)` registering the listed items.
///
/// `route name` registers an actix-web service (a handler annotated with `#[get]` and friends),
/// `mod name` pulls in the `routes` function of a child module.
///
/// ```ignore
/// macros_utils::routes! {
///     mod health,
///     route metrics_route,
/// }
/// ```
#[cfg(feature = "actix")]
#[macro_export]
macro_rules! routes {
    (@register $cfg:ident, route $name:ident) => {
        $cfg.service($name);
    };
    (@register $cfg:ident, mod $name:ident) => {
        $cfg.configure($name::routes);
    };
    ($($kind:ident $name:ident),* $(,)?) => {
        pub fn routes(cfg: &mut $crate::__private::ServiceConfig) {
            $( $crate::routes!(@register cfg, $kind $name); )*
        }
    };
}
