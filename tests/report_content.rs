//! Properties of the rendered document: determinism, one row and one card per
//! competitor, and chart data that matches the source tables.

use chrono::{DateTime, Local, TimeZone};
use pretty_assertions::assert_eq;
use regex::Regex;
use sisvet_report::report::{charts, SECTIONS};
use sisvet_report::utils::escape_html;
use sisvet_report::{analysis_data, render_report};
use test_case::test_case;

fn at(hour: u32, minute: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2025, 11, 3, hour, minute, 0).unwrap()
}

fn render(generated_at: DateTime<Local>) -> String {
    render_report(&analysis_data(), generated_at).unwrap().html
}

/// The `new Chart(...)` block that draws on the given canvas.
fn chart_block<'a>(html: &'a str, canvas_id: &str) -> &'a str {
    let needle = format!("getElementById('{}')", canvas_id);
    html.split("new Chart(")
        .find(|block| block.starts_with(&format!("document.{}", needle)))
        .unwrap_or_else(|| panic!("no chart for {}", canvas_id))
}

/// Every `data: [...]` array in a chart block, in order.
fn data_arrays<T: serde::de::DeserializeOwned>(block: &str) -> Vec<Vec<T>> {
    let pattern = Regex::new(r"data: (\[[^\]]*\])").unwrap();
    pattern
        .captures_iter(block)
        .map(|c| serde_json::from_str(&c[1]).unwrap())
        .collect()
}

fn labels(block: &str) -> Vec<String> {
    let pattern = Regex::new(r"labels: (\[[^\]]*\])").unwrap();
    let captures = pattern.captures(block).unwrap();
    serde_json::from_str(&captures[1]).unwrap()
}

#[test]
fn test_same_timestamp_is_byte_identical() {
    assert_eq!(render(at(9, 30)), render(at(9, 30)));
}

#[test]
fn test_different_timestamps_differ_only_in_date() {
    let first = render(at(9, 30));
    let second = render(at(17, 45));

    let first_lines: Vec<&str> = first.lines().collect();
    let second_lines: Vec<&str> = second.lines().collect();
    assert_eq!(first_lines.len(), second_lines.len());

    let differing: Vec<(&str, &str)> = first_lines
        .iter()
        .zip(&second_lines)
        .filter(|(a, b)| a != b)
        .map(|(a, b)| (*a, *b))
        .collect();
    assert_eq!(differing.len(), 1);
    assert!(differing[0].0.contains("Generado: 03 de noviembre de 2025, 09:30"));
    assert!(differing[0].1.contains("Generado: 03 de noviembre de 2025, 17:45"));
}

#[test]
fn test_one_summary_row_per_competitor() {
    let html = render(at(10, 0));
    let data = analysis_data();

    let pattern = Regex::new(r#"<tr data-competitor="([^"]+)">"#).unwrap();
    let rows: Vec<String> = pattern.captures_iter(&html).map(|c| c[1].to_string()).collect();
    let expected: Vec<String> = data.competitors.iter().map(|c| escape_html(&c.name)).collect();

    assert_eq!(rows, expected);
}

#[test]
fn test_every_feature_appears_in_its_card() {
    let html = render(at(10, 0));

    for competitor in analysis_data().competitors {
        let marker = format!("<div class=\"card\" data-competitor=\"{}\">", escape_html(&competitor.name));
        assert_eq!(html.matches(&marker).count(), 1, "card for {}", competitor.name);

        let start = html.find(&marker).unwrap();
        let card = &html[start..];
        let card = &card[..card.find("    </div>\n</div>").unwrap()];

        for feature in &competitor.features {
            let badge = format!("<span class=\"badge badge-info\">{}</span>", escape_html(feature));
            assert!(card.contains(&badge), "{} is missing {}", competitor.name, feature);
        }
    }
}

#[test]
fn test_market_share_chart_matches_data() {
    let html = render(at(10, 0));
    let block = chart_block(&html, charts::MARKET_SHARE_CHART);
    let data = analysis_data();

    let names: Vec<String> = data.competitors.iter().map(|c| c.name.clone()).collect();
    assert_eq!(labels(block), names);
    assert_eq!(data_arrays::<u32>(block), vec![vec![15, 20, 10, 12, 14, 8, 18, 3]]);
    assert!(block.contains("type: 'doughnut'"));
}

#[test]
fn test_price_chart_matches_data() {
    let html = render(at(10, 0));
    let block = chart_block(&html, charts::PRICE_COMPARISON_CHART);
    let data = analysis_data();

    let min: Vec<u32> = data.competitors.iter().map(|c| c.price_usd_min).collect();
    let max: Vec<u32> = data.competitors.iter().map(|c| c.price_usd_max).collect();
    assert_eq!(data_arrays::<u32>(block), vec![min, max]);
}

#[test]
fn test_radar_chart_matches_matrix() {
    let html = render(at(10, 0));
    let block = chart_block(&html, charts::RADAR_CHART);
    let matrix = &analysis_data().business.feature_matrix;

    let expected: Vec<Vec<f32>> = matrix.radar_products().map(|(i, _)| matrix.column_scores(i)).collect();
    assert_eq!(expected.len(), 3);
    assert_eq!(data_arrays::<f32>(block), expected);
    assert_eq!(labels(block).len(), matrix.criteria.len());
}

#[test]
fn test_revenue_chart_matches_series() {
    let html = render(at(10, 0));
    let block = chart_block(&html, charts::REVENUE_PROJECTION_CHART);
    let series = &analysis_data().business.projection.series;

    assert_eq!(labels(block), series.months);
    assert_eq!(
        data_arrays::<u32>(block),
        vec![series.conservative_mxn.clone(), series.optimistic_mxn.clone()]
    );
}

#[test]
fn test_marketing_chart_matches_channels() {
    let html = render(at(10, 0));
    let block = chart_block(&html, charts::MARKETING_CHANNELS_CHART);

    assert_eq!(data_arrays::<u32>(block), vec![vec![200, 150, 100, 50]]);
    assert_eq!(
        labels(block),
        vec!["Google Ads", "Meta Ads", "LinkedIn Ads", "Content Marketing"]
    );
}

#[test_case("resumen" ; "executive summary")]
#[test_case("analisis-tecnico" ; "technical analysis")]
#[test_case("competencia" ; "competition")]
#[test_case("comparacion" ; "comparison")]
#[test_case("costos" ; "costs")]
#[test_case("mercado" ; "market")]
#[test_case("cuestionarios" ; "questionnaires")]
#[test_case("recomendaciones" ; "recommendations")]
fn test_nav_link_has_target(id: &str) {
    let html = render(at(10, 0));
    assert!(html.contains(&format!("<a href=\"#{}\">", id)));
    assert_eq!(html.matches(&format!("<section id=\"{}\" class=\"section\">", id)).count(), 1);
}

#[test]
fn test_every_chart_has_a_canvas() {
    let html = render(at(10, 0));
    for id in charts::CHART_IDS {
        assert_eq!(html.matches(&format!("<canvas id=\"{}\"></canvas>", id)).count(), 1);
    }
    assert_eq!(SECTIONS.len(), 8);
    assert!(html.contains(charts::CHART_JS_URL));
}

#[test]
fn test_markup_is_escaped() {
    let html = render(at(10, 0));
    assert!(html.contains("<td>CPA &lt; $13 USD</td>"));
    assert!(!html.contains("CPA < $13"));
}
