cfg_if::cfg_if! {
    if #[cfg(target_os = "macos")] {
        mod mac;
        pub use mac::ICON_ERROR;
        pub use mac::ICON_WARNING;
    } else {
        mod freedesktop;
        pub use freedesktop::ICON_ERROR;
        pub use freedesktop::ICON_WARNING;
    }
}
