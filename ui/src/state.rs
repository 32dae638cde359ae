use std::cell::RefCell;

use hackmate_common::config::ClientConfig;
use hackmate_common::markers::CONFIG_SCRIPT_ID;

use crate::api::client::FetchClient;
use crate::views::DomView;

thread_local! {
    static CONFIG: RefCell<ClientConfig> = RefCell::new(ClientConfig::default());
}

/// Read the optional JSON override block from the page.
pub fn load_config() {
    let Some(text) = crate::dom::document()
        .and_then(|d| d.get_element_by_id(CONFIG_SCRIPT_ID))
        .and_then(|el| el.text_content())
    else {
        return;
    };
    let config = ClientConfig::from_json(&text);
    tracing::debug!("Loaded client config: {:?}", config);
    CONFIG.with(|cell| *cell.borrow_mut() = config);
}

pub fn config() -> ClientConfig {
    CONFIG.with(|cell| cell.borrow().clone())
}

pub fn client() -> FetchClient {
    FetchClient::new(&config())
}

pub fn view() -> DomView {
    DomView::new(&config())
}
