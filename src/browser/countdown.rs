//! Countdown banner refreshed once per interval.

use gloo_timers::callback::Interval;
use js_sys::Date;
use wasm_bindgen::JsValue;

use super::document;
use crate::app::SetupError;
use crate::config::PageConfig;
use crate::countdown::{AnnualDate, Remaining, target_year};

/// Fill the countdown element now and on every tick.
///
/// A page without the element gets [`SetupError::MissingElement`]; the
/// session logs it and carries on with the other features.
pub fn mount(config: &PageConfig) -> Result<(), SetupError> {
    let document = document()?;
    let id = &config.countdown.element_id;
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| SetupError::MissingElement { what: "countdown", selector: format!("#{id}") })?;

    let target = config.countdown.target;
    let tick = move || {
        let text = remaining_until(target, Date::now()).to_string();
        element.set_text_content(Some(&text));
    };
    tick();
    Interval::new(config.countdown.interval_ms, tick).forget();
    Ok(())
}

#[allow(clippy::cast_possible_wrap)]
fn occurrence_ms(target: AnnualDate, year: u32) -> f64 {
    Date::new_with_year_month_day(year, target.month_index() as i32, target.day as i32).get_time()
}

fn remaining_until(target: AnnualDate, now_ms: f64) -> Remaining {
    let year = Date::new(&JsValue::from_f64(now_ms)).get_full_year();
    let year = target_year(year, now_ms, occurrence_ms(target, year));
    Remaining::between(now_ms, occurrence_ms(target, year))
}
