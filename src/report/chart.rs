//! Rendering category totals as a pie chart page.
//!
//! The chart is built with charming, serialized to ECharts options, and
//! embedded in a standalone HTML page that loads ECharts from a CDN.

use std::{collections::BTreeMap, path::Path};

use charming::{
    Chart,
    component::{Legend, Title},
    element::{Label, Orient, Tooltip, Trigger},
    series::Pie,
};
use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::Error;

const CHART_ID: &str = "spending-by-category";
const ECHARTS_SCRIPT_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

/// Render the spending report for `totals` and write it to `path` as an HTML file.
///
/// Any existing file at `path` is overwritten.
///
/// # Errors
/// Returns an [Error::ReportWriteError] if the file could not be written.
pub fn write_report(totals: &BTreeMap<String, f64>, path: &Path) -> Result<(), Error> {
    let page = report_page(&spending_chart(totals));

    std::fs::write(path, page.into_string()).map_err(|error| {
        Error::ReportWriteError(format!("could not write {}: {error}", path.display()))
    })
}

pub(super) fn spending_chart(totals: &BTreeMap<String, f64>) -> Chart {
    let slices: Vec<(f64, &str)> = totals
        .iter()
        .map(|(category, total)| (*total, category.as_str()))
        .collect();

    Chart::new()
        .title(Title::new().text("Spending by Category").left("center"))
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .legend(Legend::new().orient(Orient::Vertical).left("left"))
        .series(
            Pie::new()
                .name("Spending")
                .radius("60%")
                .label(Label::new().formatter("{b}: {d}%"))
                .data(slices),
        )
}

fn report_page(chart: &Chart) -> Markup {
    let script = format!(
        r#"document.addEventListener('DOMContentLoaded', function() {{
            const chart = echarts.init(document.getElementById("{CHART_ID}"));
            chart.setOption({chart});
            window.addEventListener('resize', chart.resize);
        }});"#
    );

    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Spending Report" }
                script src=(ECHARTS_SCRIPT_URL) {}
                script { (PreEscaped(script)) }
            }
            body
            {
                div id=(CHART_ID) style="width: 100%; height: 600px;" {}
            }
        }
    }
}
