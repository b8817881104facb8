//! x402 web - Browser front end hosting the brand logo

use x402_web::App;

fn main() {
    dioxus::launch(App);
}
