//! Report generation

pub mod charts;
pub mod generator;

use chrono::{DateTime, Local};

use crate::data::AnalysisData;
use crate::error::Result;
use crate::models::RenderedReport;

/// A top-level section of the document: anchor id, navigation label and heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub nav_label: &'static str,
    pub title: &'static str,
}

pub const SECTIONS: [Section; 8] = [
    Section { id: "resumen", nav_label: "📋 Resumen Ejecutivo", title: "📋 Resumen Ejecutivo" },
    Section { id: "analisis-tecnico", nav_label: "💻 Análisis Técnico", title: "💻 Análisis Técnico Detallado" },
    Section { id: "competencia", nav_label: "🏆 Competencia", title: "🏆 Análisis de la Competencia" },
    Section { id: "comparacion", nav_label: "📊 Comparación", title: "📊 Matriz de Comparación Funcional" },
    Section { id: "costos", nav_label: "💰 Costos", title: "💰 Estimación de Costos y Modelo de Negocio" },
    Section { id: "mercado", nav_label: "📈 Plan de Mercado", title: "📈 Plan de Mercado y Estrategia de Ventas" },
    Section { id: "cuestionarios", nav_label: "📝 Cuestionarios", title: "📝 Cuestionarios para Estudio de Mercado" },
    Section { id: "recomendaciones", nav_label: "💡 Recomendaciones", title: "💡 Recomendaciones Estratégicas" },
];

pub const CHART_COUNT: usize = charts::CHART_IDS.len();

/// Render the full HTML document. Pure: the same data and timestamp always
/// produce the same string.
pub fn render_report(data: &AnalysisData<'_>, generated_at: DateTime<Local>) -> Result<RenderedReport> {
    let html = generator::generate_html_report(data, &generated_at)?;
    Ok(RenderedReport { html, generated_at })
}

/// Lines describing what the document contains, as printed after generation.
pub fn contents_summary(data: &AnalysisData<'_>) -> Vec<String> {
    vec![
        "Resumen ejecutivo".to_string(),
        "Análisis técnico detallado".to_string(),
        format!("Análisis de {} competidores", data.competitors.len()),
        "Matrices de comparación funcional".to_string(),
        "Estimaciones de costos detalladas".to_string(),
        "Proyecciones financieras (conservador y optimista)".to_string(),
        "Plan de mercado completo".to_string(),
        "Estrategia de ventas door-to-door".to_string(),
        "3 cuestionarios de mercado listos para usar".to_string(),
        "Recomendaciones estratégicas priorizadas".to_string(),
        "Roadmap de desarrollo".to_string(),
        format!("{} gráficas interactivas", CHART_COUNT),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::analysis_data;
    use chrono::TimeZone;

    #[test]
    fn test_section_ids_are_unique() {
        let mut ids: Vec<&str> = SECTIONS.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SECTIONS.len());
    }

    #[test]
    fn test_contents_summary_counts() {
        let lines = contents_summary(&analysis_data());
        assert!(lines.contains(&"Análisis de 8 competidores".to_string()));
        assert!(lines.contains(&"5 gráficas interactivas".to_string()));
    }

    #[test]
    fn test_render_keeps_timestamp() {
        let at = Local.with_ymd_and_hms(2025, 11, 3, 14, 5, 9).unwrap();
        let report = render_report(&analysis_data(), at).unwrap();
        assert_eq!(report.generated_at, at);
        assert!(report.html.starts_with("<!DOCTYPE html>"));
    }
}
