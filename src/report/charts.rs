//! Chart.js configuration embedded in the report's inline script

use crate::data::AnalysisData;
use crate::error::Result;
use crate::utils::{js_array, js_string};

pub const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.0/dist/chart.umd.min.js";

pub const MARKET_SHARE_CHART: &str = "marketShareChart";
pub const PRICE_COMPARISON_CHART: &str = "priceComparisonChart";
pub const RADAR_CHART: &str = "radarChart";
pub const REVENUE_PROJECTION_CHART: &str = "revenueProjectionChart";
pub const MARKETING_CHANNELS_CHART: &str = "marketingChannelsChart";

/// Canvas ids, in the order the charts appear in the document.
pub const CHART_IDS: [&str; 5] = [
    MARKET_SHARE_CHART,
    PRICE_COMPARISON_CHART,
    RADAR_CHART,
    REVENUE_PROJECTION_CHART,
    MARKETING_CHANNELS_CHART,
];

const PALETTE: [&str; 8] = [
    "#667eea", "#764ba2", "#f093fb", "#4facfe",
    "#43e97b", "#fa709a", "#30cfd0", "#c471ed",
];

/// (border, fill) pairs for line and radar series.
const SERIES_COLORS: [(&str, &str); 3] = [
    ("#667eea", "rgba(102, 126, 234, 0.2)"),
    ("#10b981", "rgba(16, 185, 129, 0.2)"),
    ("#f59e0b", "rgba(245, 158, 11, 0.2)"),
];

const FONT_FAMILY: &str = "'Segoe UI', Tahoma, Geneva, Verdana, sans-serif";

fn palette(count: usize) -> Vec<&'static str> {
    PALETTE.iter().copied().cycle().take(count).collect()
}

fn title_plugin(text: &str) -> Result<String> {
    Ok(format!(
        "title: {{\n                        display: true,\n                        text: {},\n                        font: {{ size: 16, weight: 'bold' }}\n                    }}",
        js_string(text)?
    ))
}

/// Build the complete chart script (without the surrounding `<script>` tags).
pub fn chart_script(data: &AnalysisData<'_>) -> Result<String> {
    let mut js = String::new();

    js.push_str("// Configuración global de Chart.js\n");
    js.push_str(&format!("Chart.defaults.font.family = \"{}\";\n", FONT_FAMILY));
    js.push_str("Chart.defaults.font.size = 12;\n\n");

    js.push_str(&market_share_chart(data)?);
    js.push_str(&price_comparison_chart(data)?);
    js.push_str(&radar_chart(data)?);
    js.push_str(&revenue_chart(data)?);
    js.push_str(&marketing_chart(data)?);

    Ok(js)
}

fn market_share_chart(data: &AnalysisData<'_>) -> Result<String> {
    let names: Vec<&str> = data.competitors.iter().map(|c| c.name.as_str()).collect();
    let shares: Vec<u8> = data.competitors.iter().map(|c| c.market_share).collect();

    Ok(format!(
        r#"// Gráfica de Market Share
new Chart(document.getElementById('{id}').getContext('2d'), {{
    type: 'doughnut',
    data: {{
        labels: {labels},
        datasets: [{{
            data: {shares},
            backgroundColor: {colors}
        }}]
    }},
    options: {{
        responsive: true,
        maintainAspectRatio: false,
        plugins: {{
            {title},
            legend: {{
                position: 'right'
            }}
        }}
    }}
}});

"#,
        id = MARKET_SHARE_CHART,
        labels = js_array(&names)?,
        shares = js_array(&shares)?,
        colors = js_array(&palette(names.len()))?,
        title = title_plugin("Market Share de Competidores (%)")?,
    ))
}

fn price_comparison_chart(data: &AnalysisData<'_>) -> Result<String> {
    let names: Vec<&str> = data.competitors.iter().map(|c| c.name.as_str()).collect();
    let min: Vec<u32> = data.competitors.iter().map(|c| c.price_usd_min).collect();
    let max: Vec<u32> = data.competitors.iter().map(|c| c.price_usd_max).collect();

    Ok(format!(
        r#"// Gráfica de Comparación de Precios
new Chart(document.getElementById('{id}').getContext('2d'), {{
    type: 'bar',
    data: {{
        labels: {labels},
        datasets: [
            {{
                label: 'Precio Mínimo (USD/mes)',
                data: {min},
                backgroundColor: '#667eea'
            }},
            {{
                label: 'Precio Máximo (USD/mes)',
                data: {max},
                backgroundColor: '#764ba2'
            }}
        ]
    }},
    options: {{
        responsive: true,
        maintainAspectRatio: false,
        plugins: {{
            {title}
        }},
        scales: {{
            y: {{
                beginAtZero: true,
                ticks: {{
                    callback: function(value) {{
                        return '$' + value;
                    }}
                }}
            }}
        }}
    }}
}});

"#,
        id = PRICE_COMPARISON_CHART,
        labels = js_array(&names)?,
        min = js_array(&min)?,
        max = js_array(&max)?,
        title = title_plugin("Comparación de Precios Mensuales (USD)")?,
    ))
}

fn radar_chart(data: &AnalysisData<'_>) -> Result<String> {
    let matrix = &data.business.feature_matrix;
    let axes: Vec<&str> = matrix.criteria.iter().map(|c| c.axis_label.as_str()).collect();

    let mut datasets = Vec::new();
    for (n, (column, product)) in matrix.radar_products().enumerate() {
        let (border, fill) = SERIES_COLORS[n % SERIES_COLORS.len()];
        datasets.push(format!(
            r#"            {{
                label: {label},
                data: {scores},
                borderColor: '{border}',
                backgroundColor: '{fill}',
                pointBackgroundColor: '{border}'
            }}"#,
            label = js_string(&product.name)?,
            scores = js_array(&matrix.column_scores(column))?,
            border = border,
            fill = fill,
        ));
    }

    Ok(format!(
        r#"// Gráfica Radar de Funcionalidades
new Chart(document.getElementById('{id}').getContext('2d'), {{
    type: 'radar',
    data: {{
        labels: {axes},
        datasets: [
{datasets}
        ]
    }},
    options: {{
        responsive: true,
        maintainAspectRatio: false,
        plugins: {{
            {title}
        }},
        scales: {{
            r: {{
                beginAtZero: true,
                max: 10,
                ticks: {{
                    stepSize: 2
                }}
            }}
        }}
    }}
}});

"#,
        id = RADAR_CHART,
        axes = js_array(&axes)?,
        datasets = datasets.join(",\n"),
        title = title_plugin("Comparación de Funcionalidades (0-10)")?,
    ))
}

fn revenue_chart(data: &AnalysisData<'_>) -> Result<String> {
    let series = &data.business.projection.series;
    let (conservative_color, conservative_fill) = SERIES_COLORS[0];
    let (optimistic_color, optimistic_fill) = SERIES_COLORS[1];

    Ok(format!(
        r#"// Gráfica de Proyección de Ingresos
new Chart(document.getElementById('{id}').getContext('2d'), {{
    type: 'line',
    data: {{
        labels: {months},
        datasets: [
            {{
                label: 'Escenario Conservador (MXN)',
                data: {conservative},
                borderColor: '{conservative_color}',
                backgroundColor: '{conservative_fill}',
                fill: true,
                tension: 0.4
            }},
            {{
                label: 'Escenario Optimista (MXN)',
                data: {optimistic},
                borderColor: '{optimistic_color}',
                backgroundColor: '{optimistic_fill}',
                fill: true,
                tension: 0.4
            }}
        ]
    }},
    options: {{
        responsive: true,
        maintainAspectRatio: false,
        plugins: {{
            {title}
        }},
        scales: {{
            y: {{
                beginAtZero: true,
                ticks: {{
                    callback: function(value) {{
                        return '$' + value.toLocaleString('es-MX');
                    }}
                }}
            }}
        }}
    }}
}});

"#,
        id = REVENUE_PROJECTION_CHART,
        months = js_array(&series.months)?,
        conservative = js_array(&series.conservative_mxn)?,
        optimistic = js_array(&series.optimistic_mxn)?,
        conservative_color = conservative_color,
        conservative_fill = conservative_fill.replace("0.2)", "0.1)"),
        optimistic_color = optimistic_color,
        optimistic_fill = optimistic_fill.replace("0.2)", "0.1)"),
        title = title_plugin("Proyección de Ingresos Mensuales Recurrentes (MRR)")?,
    ))
}

fn marketing_chart(data: &AnalysisData<'_>) -> Result<String> {
    let channels = &data.business.marketing.channels;
    let labels: Vec<&str> = channels.iter().map(|c| c.chart_label.as_str()).collect();
    let budget: Vec<u32> = channels.iter().map(|c| c.monthly_usd).collect();
    let colors: Vec<&str> = ["#667eea", "#764ba2", "#10b981", "#f59e0b"]
        .iter()
        .copied()
        .cycle()
        .take(labels.len())
        .collect();

    Ok(format!(
        r#"// Gráfica de Canales de Marketing
new Chart(document.getElementById('{id}').getContext('2d'), {{
    type: 'pie',
    data: {{
        labels: {labels},
        datasets: [{{
            data: {budget},
            backgroundColor: {colors}
        }}]
    }},
    options: {{
        responsive: true,
        maintainAspectRatio: false,
        plugins: {{
            {title},
            legend: {{
                position: 'bottom'
            }}
        }}
    }}
}});

"#,
        id = MARKETING_CHANNELS_CHART,
        labels = js_array(&labels)?,
        budget = js_array(&budget)?,
        colors = js_array(&colors)?,
        title = title_plugin("Distribución de Presupuesto Marketing (USD/mes)")?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::analysis_data;

    #[test]
    fn test_palette_cycles() {
        let colors = palette(10);
        assert_eq!(colors.len(), 10);
        assert_eq!(colors[8], colors[0]);
    }

    #[test]
    fn test_market_share_series() {
        let js = market_share_chart(&analysis_data()).unwrap();
        assert!(js.contains("type: 'doughnut'"));
        assert!(js.contains("data: [15, 20, 10, 12, 14, 8, 18, 3]"));
        assert!(js.contains(r#"["MyVete", "Provet Cloud", "Panther", "OKVet", "GVET", "Sami.vet", "QVET", "SaelVet"]"#));
    }

    #[test]
    fn test_radar_series_follow_matrix_columns() {
        let js = radar_chart(&analysis_data()).unwrap();
        assert!(js.contains("label: \"Provet Cloud\""));
        assert!(js.contains("data: [9.0, 9.0, 9.5, 9.0, 8.5, 8.5, 8.5, 9.5, 8.5, 8.5]"));
        assert!(!js.contains("label: \"MyVete\""));
    }

    #[test]
    fn test_titles_are_script_safe() {
        assert!(title_plugin("Market Share de Competidores (%)")
            .unwrap()
            .contains(r#"text: "Market Share de Competidores (%)","#));

        let title = title_plugin("it's </script>").unwrap();
        assert!(title.contains(r#"text: "it's <\/script>","#));
        assert!(!title.contains("</script>"));
    }

    #[test]
    fn test_script_builds_every_chart() {
        let js = chart_script(&analysis_data()).unwrap();
        for id in CHART_IDS {
            assert!(js.contains(&format!("getElementById('{}')", id)), "missing {}", id);
        }
        assert_eq!(js.matches("new Chart(").count(), CHART_IDS.len());
    }
}
