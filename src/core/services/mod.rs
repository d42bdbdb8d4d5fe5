pub mod logging_proxy;
