fn main() {
    // The library core builds without the desktop shell; only the Tauri
    // binary needs the generated context.
    #[cfg(feature = "desktop")]
    tauri_build::build();
}
