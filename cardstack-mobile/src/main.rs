fn main() {
    #[cfg(target_arch = "wasm32")]
    cardstack_mobile::run_app();
}
