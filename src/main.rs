use yew_coin_tap::components::app::App;

fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
