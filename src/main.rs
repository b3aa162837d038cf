use iced::Application;

fn main() -> iced::Result {
    // load environment from .env (optional)
    let _ = dotenvy::dotenv();
    if let Err(e) = vetrina::utils::logger::VetrinaLogger::init() {
        eprintln!("logger initialization failed: {}", e);
    }
    vetrina::client::gui::app::StoreApp::run(iced::Settings::default())
}
