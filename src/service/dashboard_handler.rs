use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::DashboardConfig;
use crate::dependency::{init_logging, page_origin, FetchNewsClient, NewsEndpoint};
use crate::error::ConfigError;
use crate::logic::DashboardLogic;
use crate::types::{ChartPeriod, NewsFilter};

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Entry point the page talks to. Owns the dashboard state; every view it
/// returns is a fresh copy.
#[wasm_bindgen]
pub struct DashboardHandler {
    logic: Rc<RefCell<DashboardLogic>>,
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    source: Rc<FetchNewsClient>,
}

impl DashboardHandler {
    pub fn with_config(config: DashboardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let level = config.level()?;
        init_logging(level);

        let origin = page_origin();
        let endpoint = NewsEndpoint::parse(&config.news_endpoint, origin.as_deref())
            .map_err(ConfigError::Endpoint)?;
        tracing::info!(endpoint = endpoint.as_str(), "dashboard ready");

        Ok(Self {
            logic: Rc::new(RefCell::new(DashboardLogic::new(config))),
            source: Rc::new(FetchNewsClient::new(endpoint)),
        })
    }
}

#[wasm_bindgen]
impl DashboardHandler {
    /// Accepts a partial config object; `undefined` means all defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<DashboardHandler, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            DashboardConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        Self::with_config(config).map_err(js_error)
    }

    #[wasm_bindgen]
    pub fn selected_country(&self) -> String {
        self.logic.borrow().selected().to_string()
    }

    #[wasm_bindgen]
    pub fn country_options(&self) -> Result<JsValue, JsValue> {
        to_js(&self.logic.borrow().country_options())
    }

    #[wasm_bindgen]
    pub fn country_view(&self) -> Result<JsValue, JsValue> {
        to_js(&self.logic.borrow().country_view())
    }

    #[wasm_bindgen]
    pub fn fascism_view(&self) -> Result<JsValue, JsValue> {
        to_js(&self.logic.borrow().fascism_view())
    }

    #[wasm_bindgen]
    pub fn news_panel(&self) -> Result<JsValue, JsValue> {
        to_js(&self.logic.borrow().news_panel())
    }

    #[wasm_bindgen]
    pub fn dashboard_view(&self) -> Result<JsValue, JsValue> {
        to_js(&self.logic.borrow().dashboard_view())
    }

    /// `"all"`, `"gov"` or `"opposition"`.
    #[wasm_bindgen]
    pub fn set_news_filter(&self, filter: JsValue) -> Result<(), JsValue> {
        let filter: NewsFilter = serde_wasm_bindgen::from_value(filter)?;
        self.logic.borrow_mut().set_news_filter(filter);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn dynamics_view(&self) -> Result<JsValue, JsValue> {
        to_js(&self.logic.borrow().dynamics_view())
    }

    /// `"1m"`, `"3m"`, `"6m"` or `"1y"`.
    #[wasm_bindgen]
    pub fn set_chart_period(&self, period: JsValue) -> Result<(), JsValue> {
        let period: ChartPeriod = serde_wasm_bindgen::from_value(period)?;
        self.logic.borrow_mut().set_chart_period(period);
        Ok(())
    }

    /// Report for the current selection, dated today, as `{fileName,
    /// mimeType, contents}`.
    #[wasm_bindgen]
    pub fn export_report(&self) -> Result<JsValue, JsValue> {
        let file = self
            .logic
            .borrow()
            .export_report(crate::dependency::today())
            .map_err(js_error)?;
        to_js(&file)
    }

    #[wasm_bindgen]
    pub fn download_report(&self) -> Result<(), JsValue> {
        let file = self
            .logic
            .borrow()
            .export_report(crate::dependency::today())
            .map_err(js_error)?;
        crate::dependency::offer_download(&file).map_err(js_error)
    }

    /// Switches the selection right away and resolves with the news panel
    /// once the fetch for it settles.
    #[cfg(target_arch = "wasm32")]
    #[wasm_bindgen]
    pub fn select_country(&self, code: String) -> js_sys::Promise {
        let logic = Rc::clone(&self.logic);
        let source = Rc::clone(&self.source);
        wasm_bindgen_futures::future_to_promise(async move {
            crate::logic::select_and_refresh(&logic, source.as_ref(), &code).await;
            let panel = logic.borrow().news_panel();
            to_js(&panel)
        })
    }

    #[cfg(target_arch = "wasm32")]
    #[wasm_bindgen]
    pub fn refresh_news(&self) -> js_sys::Promise {
        let logic = Rc::clone(&self.logic);
        let source = Rc::clone(&self.source);
        wasm_bindgen_futures::future_to_promise(async move {
            crate::logic::refresh_news(&logic, source.as_ref()).await;
            let panel = logic.borrow().news_panel();
            to_js(&panel)
        })
    }

    #[cfg(target_arch = "wasm32")]
    #[wasm_bindgen]
    pub fn collect_news(&self) -> js_sys::Promise {
        let logic = Rc::clone(&self.logic);
        let source = Rc::clone(&self.source);
        wasm_bindgen_futures::future_to_promise(async move {
            crate::logic::collect_and_refresh(&logic, source.as_ref()).await;
            let panel = logic.borrow().news_panel();
            to_js(&panel)
        })
    }
}

#[cfg(test)]
impl DashboardHandler {
    pub fn logic(&self) -> std::cell::Ref<'_, DashboardLogic> {
        self.logic.borrow()
    }
}
