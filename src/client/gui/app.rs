use crate::client::config::ClientConfig;
use crate::client::models::app_state::StoreState;
use crate::client::models::messages::Message;
use crate::client::services::catalog_service::{CatalogService, FetchHandle};
use iced::{Application, Command, Element, Theme};

pub struct StoreApp {
    pub state: StoreState,
    pub catalog: CatalogService,
    catalog_fetch: FetchHandle,
}

impl Application for StoreApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ();

    fn new(_flags: ()) -> (Self, Command<Message>) {
        let config = ClientConfig::from_env();
        let catalog = CatalogService::new(&config);

        // One-shot catalog load, started at construction. The handle stays
        // with the app so teardown can drop a late completion.
        let (catalog_fetch, fetch) = catalog.fetch_sample();
        let app = StoreApp {
            state: StoreState::default(),
            catalog,
            catalog_fetch,
        };

        let cmd = Command::perform(fetch, |outcome| match outcome {
            Some(Ok(products)) => Message::ProductsLoaded { products },
            Some(Err(e)) => Message::ProductsFailed {
                error: e.to_string(),
            },
            None => Message::NoOp,
        });

        (app, cmd)
    }

    fn title(&self) -> String {
        "ElectroX".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        // A fresh catalog fans out one image fetch per product; everything
        // else is a plain state transition.
        if let Message::ProductsLoaded { products } = &message {
            let fetches: Vec<Command<Message>> = products
                .iter()
                .map(|p| {
                    let svc = self.catalog.clone();
                    let product_id = p.id;
                    let url = p.display_image_url();
                    Command::perform(
                        async move {
                            match svc.fetch_image(&url).await {
                                Ok(handle) => Some((product_id, handle)),
                                Err(e) => {
                                    log::warn!(
                                        "image fetch failed for product {}: {}",
                                        product_id,
                                        e
                                    );
                                    None
                                }
                            }
                        },
                        |loaded| match loaded {
                            Some((product_id, handle)) => {
                                Message::ProductImageLoaded { product_id, handle }
                            }
                            None => Message::NoOp,
                        },
                    )
                })
                .collect();

            let state_cmd = self.state.update(message);
            return Command::batch(fetches.into_iter().chain(std::iter::once(state_cmd)));
        }

        self.state.update(message)
    }

    fn view(&self) -> Element<Message> {
        crate::client::gui::views::storefront::view(&self.state)
    }
}

impl Drop for StoreApp {
    fn drop(&mut self) {
        self.catalog_fetch.cancel();
    }
}
