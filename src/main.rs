//! Browser entry point. Built with `--features csr` and mounted into `<body>`.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        log::info!("mounting expotech landing page");
        leptos::mount::mount_to_body(expotech::app::App);
    }
}
