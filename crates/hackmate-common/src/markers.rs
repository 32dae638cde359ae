//! Selectors, attributes and classes shared between the server templates and
//! the page client.

pub const NOTIFICATION_BADGE_ID: &str = "notification-badge";
pub const SEARCH_INPUT: &str = ".search-input";
pub const SEARCHABLE_ITEM: &str = ".searchable-item";
pub const FILTER_SELECT: &str = ".filter-select";
pub const FILTERABLE_ITEM: &str = ".filterable-item";
pub const NEEDS_VALIDATION: &str = ".needs-validation";
pub const ANIMATE_ON_SCROLL: &str = ".animate-on-scroll";
pub const TOOLTIP_TRIGGER: &str = "[data-bs-toggle=\"tooltip\"]";
pub const MAIN_CONTAINER: &str = "main .container";
pub const CONFIG_SCRIPT_ID: &str = "hackmate-config";

pub const JOIN_TEAM_BTN_CLASS: &str = "join-team-btn";
pub const REGISTER_EVENT_BTN_CLASS: &str = "register-event-btn";

pub const DATA_TEAM_ID: &str = "data-team-id";
pub const DATA_TEAM_NAME: &str = "data-team-name";
pub const DATA_EVENT_ID: &str = "data-event-id";
pub const DATA_EVENT_TITLE: &str = "data-event-title";
pub const DATA_CATEGORY: &str = "data-category";
/// Set on modal buttons that carry an action; the value is the button index.
pub const DATA_MODAL_ACTION: &str = "data-modal-action";

pub const JOIN_MESSAGE_ID: &str = "join-message";

pub const WAS_VALIDATED_CLASS: &str = "was-validated";
pub const FADE_IN_CLASS: &str = "fade-in-up";
pub const LOADING_CLASS: &str = "loading";

/// Intersection ratio at which a scroll-animated element fades in.
pub const SCROLL_THRESHOLD: f64 = 0.1;
/// Negative bottom margin so elements animate just before the viewport edge.
pub const SCROLL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
