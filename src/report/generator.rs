//! HTML document assembly

use chrono::{DateTime, Local};

use super::charts::{self, CHART_JS_URL};
use super::{Section, SECTIONS};
use crate::data::AnalysisData;
use crate::error::Result;
use crate::models::{CompetitorProfile, PricingPlan};
use crate::utils::{escape_html, format_long_date, format_score, format_thousands, format_usd, js_string};

const STYLES: &str = include_str!("templates/styles.css");
const POSITIONING: &str = include_str!("templates/positioning.html");
const SALES_PREP: &str = include_str!("templates/sales_prep.html");
const QUESTIONNAIRES: &str = include_str!("templates/questionnaires.html");
const RECOMMENDATIONS: &str = include_str!("templates/recommendations.html");
const FOOTER: &str = include_str!("templates/footer.html");
const PAGE_JS: &str = include_str!("templates/page.js");

pub fn generate_html_report(data: &AnalysisData<'_>, generated_at: &DateTime<Local>) -> Result<String> {
    let mut html = String::with_capacity(128 * 1024);

    write_head(&mut html, data);
    write_header(&mut html, data, generated_at);
    write_nav(&mut html);

    html.push_str("        <div class=\"content\">\n");
    write_summary(&mut html, data);
    write_technical(&mut html, data);
    write_competition(&mut html, data);
    write_comparison(&mut html, data);
    write_costs(&mut html, data);
    write_market(&mut html, data);
    write_static_section(&mut html, &SECTIONS[6], QUESTIONNAIRES);
    write_static_section(&mut html, &SECTIONS[7], RECOMMENDATIONS);
    html.push_str("        </div>\n\n");

    // Footer
    html.push_str("        <div class=\"footer\">\n");
    html.push_str(FOOTER);
    html.push_str("        </div>\n    </div>\n\n");

    write_script(&mut html, data)?;
    html.push_str("</body>\n</html>\n");

    Ok(html)
}

fn write_head(html: &mut String, data: &AnalysisData<'_>) {
    html.push_str("<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!(
        "    <title>Análisis Completo - Sistema Veterinario {}</title>\n",
        escape_html(&data.product.name)
    ));
    html.push_str(&format!("    <script src=\"{}\"></script>\n", CHART_JS_URL));
    html.push_str("    <style>\n");
    html.push_str(STYLES);
    html.push_str("    </style>\n</head>\n<body>\n    <div class=\"container\">\n");
}

fn write_header(html: &mut String, data: &AnalysisData<'_>, generated_at: &DateTime<Local>) {
    html.push_str("        <div class=\"header\">\n");
    html.push_str("            <h1>📊 Análisis Completo del Sistema</h1>\n");
    html.push_str(&format!(
        "            <p><strong>{}</strong> - Sistema de Gestión Veterinaria</p>\n",
        escape_html(&data.product.name)
    ));
    html.push_str(&format!(
        "            <div class=\"date\">Generado: {}</div>\n",
        format_long_date(generated_at)
    ));
    html.push_str("        </div>\n\n");
}

fn write_nav(html: &mut String) {
    html.push_str("        <nav class=\"nav\">\n            <ul>\n");
    for section in &SECTIONS {
        html.push_str(&format!(
            "                <li><a href=\"#{}\">{}</a></li>\n",
            section.id, section.nav_label
        ));
    }
    html.push_str("            </ul>\n        </nav>\n\n");
}

fn open_section(html: &mut String, section: &Section) {
    html.push_str(&format!(
        "            <section id=\"{}\" class=\"section\">\n                <h2>{}</h2>\n\n",
        section.id, section.title
    ));
}

fn close_section(html: &mut String) {
    html.push_str("            </section>\n\n");
}

fn write_static_section(html: &mut String, section: &Section, body: &str) {
    open_section(html, section);
    html.push_str(body);
    close_section(html);
}

fn progress_bar(percent: u32, label: &str) -> String {
    format!(
        "<div class=\"progress-bar\"><div class=\"progress-fill\" style=\"width: {}%\">{}</div></div>",
        percent, label
    )
}

fn write_list(html: &mut String, class: Option<&str>, items: &[String]) {
    match class {
        Some(class) => html.push_str(&format!("<ul class=\"{}\">\n", class)),
        None => html.push_str("<ul>\n"),
    }
    for item in items {
        html.push_str(&format!("    <li>{}</li>\n", escape_html(item)));
    }
    html.push_str("</ul>\n");
}

fn write_summary(html: &mut String, data: &AnalysisData<'_>) {
    let product = data.product;
    let name = escape_html(&product.name);
    open_section(html, &SECTIONS[0]);

    html.push_str("<div class=\"success-box\">\n    <h4>🎯 Estado Actual del Proyecto</h4>\n");
    html.push_str(&format!(
        "    <p><strong>{}</strong> es un sistema de gestión veterinaria funcional con {} líneas de código, \
         implementando tecnologías modernas y una arquitectura escalable. El proyecto está listo para pruebas \
         beta y comercialización inicial.</p>\n</div>\n\n",
        name,
        format_thousands(product.line_count as u64)
    ));

    let stats = [
        (product.modules.len().to_string(), "Módulos Implementados"),
        (product.table_count.to_string(), "Tablas en Base de Datos"),
        (data.competitors.len().to_string(), "Competidores Analizados"),
        (format!("{}%", product.completeness_pct), "Completitud Funcional"),
    ];
    html.push_str("<div class=\"grid\">\n");
    for (value, label) in &stats {
        html.push_str(&format!(
            "    <div class=\"card\">\n        <div class=\"stat\">\n            <div class=\"stat-number\">{}</div>\n            <div class=\"stat-label\">{}</div>\n        </div>\n    </div>\n",
            value, label
        ));
    }
    html.push_str("</div>\n\n");

    html.push_str("<h3>✅ Fortalezas Principales</h3>\n<div class=\"grid\">\n");
    for (i, strength) in product.strengths.iter().take(6).enumerate() {
        html.push_str(&format!(
            "    <div class=\"card\">\n        <h4>#{}</h4>\n        <p>{}</p>\n    </div>\n",
            i + 1,
            escape_html(strength)
        ));
    }
    html.push_str("</div>\n\n");

    html.push_str("<h3>⚠️ Áreas de Mejora Prioritarias</h3>\n<div class=\"warning-box\">\n    <ul>\n");
    for weakness in product.weaknesses.iter().take(8) {
        html.push_str(&format!("        <li><strong>{}</strong></li>\n", escape_html(weakness)));
    }
    html.push_str("    </ul>\n</div>\n");

    close_section(html);
}

fn write_technical(html: &mut String, data: &AnalysisData<'_>) {
    let product = data.product;
    open_section(html, &SECTIONS[1]);

    // Stack
    html.push_str("<h3>🎨 Stack Tecnológico</h3>\n<div class=\"grid\">\n");
    for group in &product.tech_stack {
        html.push_str(&format!(
            "<div class=\"card\" data-stack=\"{}\">\n    <h4>{}</h4>\n",
            escape_html(&group.key),
            escape_html(&group.title)
        ));
        write_list(html, None, &group.items);
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n\n");

    html.push_str("<h3>📦 Módulos Implementados</h3>\n");
    write_list(html, Some("checklist"), &product.modules);

    // Database
    html.push_str("\n<h3>🗄️ Arquitectura de Base de Datos</h3>\n<div class=\"info-box\">\n");
    html.push_str(&format!("    <p><strong>Total de Tablas:</strong> {}</p>\n", product.table_count));
    html.push_str("    <p><strong>Motor:</strong> MySQL con InnoDB</p>\n");
    html.push_str("    <p><strong>Características:</strong></p>\n    <ul>\n");
    for feature in [
        "Relaciones con integridad referencial (Foreign Keys)",
        "Índices optimizados para consultas frecuentes",
        "Vistas SQL para reportes complejos",
        "Triggers y audit logs implementados",
        "Sistema de licencias multi-clínica",
        "Soporte para múltiples países y códigos postales",
    ] {
        html.push_str(&format!("        <li>{}</li>\n", feature));
    }
    html.push_str("    </ul>\n</div>\n\n");

    // Code quality
    html.push_str("<h3>📈 Calidad del Código</h3>\n<table>\n");
    html.push_str("    <tr>\n        <th>Aspecto</th>\n        <th>Estado</th>\n        <th>Calificación</th>\n    </tr>\n");
    for rating in &product.quality {
        html.push_str(&format!(
            "    <tr>\n        <td>{}</td>\n        <td><span class=\"badge {}\">{}</span></td>\n        <td>{}</td>\n    </tr>\n",
            escape_html(&rating.aspect),
            rating.tone.css_class(),
            escape_html(&rating.verdict),
            progress_bar(rating.percent as u32, &format!("{}%", rating.percent))
        ));
    }
    html.push_str("</table>\n");

    close_section(html);
}

fn write_competition(html: &mut String, data: &AnalysisData<'_>) {
    open_section(html, &SECTIONS[2]);

    html.push_str(&format!(
        "<p class=\"highlight\">\n    <strong>Mercado Analizado:</strong> Se analizaron {} competidores principales en el mercado \
         latinoamericano y global de software veterinario. El mercado está valorado en aproximadamente \
         <strong>$450 millones USD anuales</strong> en Latinoamérica con un crecimiento del 12% anual.\n</p>\n\n",
        data.competitors.len()
    ));

    // Summary table
    html.push_str("<h3>📊 Competidores Principales</h3>\n<table>\n    <tr>\n");
    for header in ["Software", "País", "Precio Mensual (USD)", "Puntuación", "Market Share", "Trial"] {
        html.push_str(&format!("        <th>{}</th>\n", header));
    }
    html.push_str("    </tr>\n");
    for competitor in data.competitors {
        write_competitor_row(html, competitor);
    }
    html.push_str("</table>\n\n");

    for id in [charts::MARKET_SHARE_CHART, charts::PRICE_COMPARISON_CHART] {
        write_chart_canvas(html, id);
    }

    html.push_str("<h3>🔍 Análisis Detallado por Competidor</h3>\n");
    for competitor in data.competitors {
        write_competitor_card(html, competitor);
    }

    close_section(html);
}

fn write_competitor_row(html: &mut String, competitor: &CompetitorProfile) {
    let name = escape_html(&competitor.name);
    html.push_str(&format!("    <tr data-competitor=\"{}\">\n", name));
    html.push_str(&format!("        <td><strong>{}</strong></td>\n", name));
    html.push_str(&format!("        <td>{}</td>\n", escape_html(&competitor.country)));
    html.push_str(&format!(
        "        <td>${} - ${}</td>\n",
        competitor.price_usd_min, competitor.price_usd_max
    ));
    html.push_str(&format!(
        "        <td>{}</td>\n",
        progress_bar(competitor.score_percent(), &format!("{}/10", format_score(competitor.score)))
    ));
    html.push_str(&format!("        <td>{}%</td>\n", competitor.market_share));
    html.push_str(&format!(
        "        <td><span class=\"badge badge-info\">{}</span></td>\n",
        escape_html(&competitor.trial)
    ));
    html.push_str("    </tr>\n");
}

fn write_competitor_card(html: &mut String, competitor: &CompetitorProfile) {
    let name = escape_html(&competitor.name);
    html.push_str(&format!("<div class=\"card\" data-competitor=\"{}\">\n", name));
    html.push_str(&format!("    <h4>{}</h4>\n", name));
    html.push_str(&format!("    <p><strong>Origen:</strong> {}</p>\n", escape_html(&competitor.country)));
    html.push_str(&format!(
        "    <p><strong>Precio:</strong> <span class=\"price-tag\">${}-${} USD/mes</span></p>\n",
        competitor.price_usd_min, competitor.price_usd_max
    ));
    html.push_str(&format!(
        "    <p><strong>Puntuación:</strong> {}/10</p>\n",
        format_score(competitor.score)
    ));
    html.push_str("    <p><strong>Funcionalidades:</strong></p>\n");
    html.push_str("    <div style=\"display: flex; flex-wrap: wrap; gap: 5px; margin-top: 10px;\">\n");
    for feature in &competitor.features {
        html.push_str(&format!(
            "        <span class=\"badge badge-info\">{}</span>\n",
            escape_html(feature)
        ));
    }
    html.push_str("    </div>\n</div>\n");
}

fn write_chart_canvas(html: &mut String, id: &str) {
    html.push_str(&format!(
        "<div class=\"chart-container\">\n    <canvas id=\"{}\"></canvas>\n</div>\n\n",
        id
    ));
}

fn write_comparison(html: &mut String, data: &AnalysisData<'_>) {
    let matrix = &data.business.feature_matrix;
    open_section(html, &SECTIONS[3]);

    html.push_str("<div class=\"info-box\">\n    <h4>Metodología de Evaluación</h4>\n");
    html.push_str(&format!(
        "    <p>Se evaluaron {} funcionalidades críticas en una escala de 0-10, donde:</p>\n",
        matrix.criteria.len()
    ));
    html.push_str("    <ul>\n");
    html.push_str("        <li><strong>10:</strong> Funcionalidad completa y avanzada</li>\n");
    html.push_str("        <li><strong>7-9:</strong> Funcionalidad implementada con algunas limitaciones</li>\n");
    html.push_str("        <li><strong>4-6:</strong> Funcionalidad básica o parcial</li>\n");
    html.push_str("        <li><strong>0-3:</strong> Funcionalidad inexistente o muy limitada</li>\n");
    html.push_str("    </ul>\n</div>\n\n");

    html.push_str("<table>\n    <tr>\n        <th>Funcionalidad</th>\n");
    for product in &matrix.products {
        html.push_str(&format!("        <th>{}</th>\n", escape_html(&product.column)));
    }
    html.push_str("    </tr>\n");
    for criterion in &matrix.criteria {
        html.push_str(&format!("    <tr>\n        <td>{}</td>\n", escape_html(&criterion.name)));
        for score in &criterion.scores {
            let percent = (score * 10.0).round() as u32;
            html.push_str(&format!("        <td>{}</td>\n", progress_bar(percent, &format_score(*score))));
        }
        html.push_str("    </tr>\n");
    }
    html.push_str("</table>\n\n");

    write_chart_canvas(html, charts::RADAR_CHART);
    html.push_str(POSITIONING);

    close_section(html);
}

fn write_costs(html: &mut String, data: &AnalysisData<'_>) {
    let costs = &data.business.costs;
    open_section(html, &SECTIONS[4]);

    // Development
    html.push_str("<h3>💵 Costos de Desarrollo Completados</h3>\n<table>\n    <tr>\n");
    for header in ["Concepto", "Horas Estimadas", "Costo por Hora (USD)", "Total (USD)"] {
        html.push_str(&format!("        <th>{}</th>\n", header));
    }
    html.push_str("    </tr>\n");
    for item in &costs.development {
        html.push_str(&format!(
            "    <tr>\n        <td>{}</td>\n        <td>{}</td>\n        <td>{}</td>\n        <td class=\"price-tag\">{}</td>\n    </tr>\n",
            escape_html(&item.concept),
            item.hours,
            format_usd(item.rate_usd),
            format_usd(item.total_usd())
        ));
    }
    html.push_str(&format!(
        "    <tr>\n        <th colspan=\"3\">TOTAL INVERSIÓN DESARROLLO</th>\n        <th class=\"price-tag\" style=\"color: #667eea;\">{} USD</th>\n    </tr>\n</table>\n\n",
        format_usd(costs.development_total_usd())
    ));

    // Operation
    html.push_str("<h3>📊 Costos Mensuales de Operación</h3>\n<table>\n    <tr>\n");
    for header in ["Concepto", "Costo Mensual (USD)", "Costo Anual (USD)"] {
        html.push_str(&format!("        <th>{}</th>\n", header));
    }
    html.push_str("    </tr>\n");
    let operating_row = |concept: &str, monthly: u32, annual: u32| {
        format!(
            "    <tr>\n        <td>{}</td>\n        <td>{}</td>\n        <td>{}</td>\n    </tr>\n",
            escape_html(concept),
            format_usd(monthly),
            format_usd(annual)
        )
    };
    for item in &costs.infrastructure {
        html.push_str(&operating_row(&item.concept, item.monthly_usd, item.annual_usd()));
    }
    let infrastructure = costs.infrastructure_monthly_usd();
    html.push_str(&format!(
        "    <tr>\n        <th>SUBTOTAL INFRAESTRUCTURA</th>\n        <th>{}/mes</th>\n        <th>{}/año</th>\n    </tr>\n",
        format_usd(infrastructure),
        format_usd(infrastructure * 12)
    ));
    html.push_str("    <tr>\n        <td colspan=\"3\" style=\"height: 20px;\"></td>\n    </tr>\n");
    for item in &costs.operations {
        html.push_str(&operating_row(&item.concept, item.monthly_usd, item.annual_usd()));
    }
    let total = costs.total_monthly_usd();
    html.push_str(&format!(
        "    <tr>\n        <th>TOTAL OPERACIÓN MENSUAL</th>\n        <th class=\"price-tag\" style=\"color: #667eea;\">{}/mes</th>\n        <th class=\"price-tag\" style=\"color: #667eea;\">{}/año</th>\n    </tr>\n</table>\n\n",
        format_usd(total),
        format_usd(total * 12)
    ));

    // Pricing
    html.push_str("<h3>💡 Modelo de Precios Propuesto</h3>\n<div class=\"grid\">\n");
    for plan in &data.business.plans {
        write_pricing_plan(html, plan);
    }
    html.push_str("</div>\n\n");

    write_projection(html, data);
    write_chart_canvas(html, charts::REVENUE_PROJECTION_CHART);

    // Break-even
    let break_even = &data.business.break_even;
    html.push_str("<h3>💰 Punto de Equilibrio</h3>\n<div class=\"highlight\">\n");
    html.push_str(&format!(
        "    <p><strong>Costos fijos mensuales:</strong> {} USD (${} MXN)</p>\n",
        format_usd(total),
        format_thousands(break_even.fixed_monthly_mxn as u64)
    ));
    html.push_str(&format!(
        "    <p><strong>Precio promedio por cliente:</strong> ${} MXN/mes</p>\n",
        format_thousands(break_even.average_price_mxn as u64)
    ));
    html.push_str(&format!(
        "    <p><strong>Clientes necesarios para break-even:</strong> <span class=\"price-tag\">{} clientes</span></p>\n",
        break_even.clients_needed
    ));
    html.push_str(&format!(
        "    <p><strong>Tiempo estimado para alcanzarlo:</strong> {}</p>\n</div>\n",
        escape_html(&break_even.time_to_reach)
    ));

    close_section(html);
}

fn write_pricing_plan(html: &mut String, plan: &PricingPlan) {
    if plan.featured {
        html.push_str("<div class=\"card\" style=\"border: 3px solid #667eea;\">\n");
    } else {
        html.push_str("<div class=\"card\">\n");
    }
    html.push_str(&format!(
        "    <h4>{} {}</h4>\n",
        escape_html(&plan.icon),
        escape_html(&plan.name)
    ));
    if plan.featured {
        html.push_str("    <span class=\"badge badge-success\">MÁS POPULAR</span>\n");
    }
    html.push_str(&format!(
        "    <div class=\"price-tag\">${} MXN/mes</div>\n",
        format_thousands(plan.price_mxn as u64)
    ));
    html.push_str(&format!(
        "    <p style=\"color: #6b7280;\">≈ {} USD/mes</p>\n",
        format_usd(plan.approx_usd)
    ));
    html.push_str("    <ul style=\"margin-top: 15px;\">\n");
    for item in &plan.includes {
        html.push_str(&format!("        <li>{}</li>\n", escape_html(item)));
    }
    html.push_str("    </ul>\n</div>\n");
}

fn write_projection(html: &mut String, data: &AnalysisData<'_>) {
    let projection = &data.business.projection;
    let mxn = |value: u32| format!("${} MXN", format_thousands(value as u64));

    html.push_str("<h3>📈 Proyección Financiera (12 meses)</h3>\n");
    html.push_str("<div class=\"info-box\">\n    <h4>Escenario Conservador</h4>\n    <table>\n        <tr>\n");
    for header in ["Mes", "Clientes Nuevos", "Total Clientes", "Ingresos Mensuales", "Ingresos Acumulados"] {
        html.push_str(&format!("            <th>{}</th>\n", header));
    }
    html.push_str("        </tr>\n");
    for row in &projection.conservative {
        html.push_str(&format!(
            "        <tr>\n            <td>{}</td>\n            <td>{}</td>\n            <td>{}</td>\n            <td>{}</td>\n            <td>{}</td>\n        </tr>\n",
            escape_html(&row.period),
            row.new_clients,
            row.total_clients,
            mxn(row.monthly_mxn),
            mxn(row.cumulative_mxn)
        ));
    }
    html.push_str("    </table>\n");

    let annual_mxn = projection.conservative.last().map(|row| row.cumulative_mxn).unwrap_or(0);
    html.push_str(&format!(
        "    <p><strong>Ingreso Anual Proyectado:</strong> <span class=\"price-tag\">{} ≈ {} USD</span></p>\n",
        mxn(annual_mxn),
        format_usd(projection.conservative_annual_usd)
    ));
    html.push_str(&format!(
        "    <p><strong>ROI estimado:</strong> {}</p>\n</div>\n\n",
        escape_html(&projection.conservative_roi)
    ));

    let optimistic = &projection.optimistic;
    html.push_str("<div class=\"success-box\">\n    <h4>Escenario Optimista (con marketing activo)</h4>\n");
    html.push_str(&format!(
        "    <p><strong>Clientes al final del año:</strong> {} clínicas</p>\n",
        optimistic.clinics
    ));
    html.push_str(&format!(
        "    <p><strong>Ingreso mensual recurrente (MRR):</strong> {} ≈ {} USD</p>\n",
        mxn(optimistic.mrr_mxn),
        format_usd(optimistic.mrr_usd)
    ));
    html.push_str(&format!(
        "    <p><strong>Ingreso anual:</strong> <span class=\"price-tag\">{} ≈ {} USD</span></p>\n",
        mxn(optimistic.annual_mxn),
        format_usd(optimistic.annual_usd)
    ));
    html.push_str(&format!(
        "    <p><strong>ROI estimado:</strong> {}</p>\n</div>\n\n",
        escape_html(&optimistic.roi)
    ));
}

fn write_market(html: &mut String, data: &AnalysisData<'_>) {
    let business = data.business;
    open_section(html, &SECTIONS[5]);

    html.push_str("<h3>🎯 Mercado Objetivo</h3>\n<div class=\"grid\">\n");
    for segment in &business.segments {
        html.push_str(&format!("<div class=\"card\">\n    <h4>{}</h4>\n", escape_html(&segment.title)));
        write_list(html, None, &segment.traits);
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n\n");

    html.push_str("<h3>🚀 Estrategia de Go-to-Market</h3>\n<div class=\"timeline\">\n");
    for phase in &business.phases {
        html.push_str(&format!(
            "<div class=\"timeline-item\">\n    <h4>{}</h4>\n",
            escape_html(&phase.title)
        ));
        write_list(html, Some("checklist"), &phase.actions);
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n\n");

    html.push_str("<h3>📍 Estrategia de Ventas Directas (Door-to-Door)</h3>\n");
    html.push_str(SALES_PREP);

    // Objections
    html.push_str("\n<div class=\"warning-box\">\n    <h4>Objeciones Comunes y Respuestas</h4>\n");
    html.push_str("    <table style=\"background: white; margin-top: 15px;\">\n");
    html.push_str("        <tr>\n            <th>Objeción</th>\n            <th>Respuesta</th>\n        </tr>\n");
    for objection in &business.objections {
        html.push_str(&format!(
            "        <tr>\n            <td>\"{}\"</td>\n            <td>\"{}\"</td>\n        </tr>\n",
            escape_html(&objection.objection),
            escape_html(&objection.answer)
        ));
    }
    html.push_str("    </table>\n</div>\n\n");

    // Zones
    html.push_str("<h3>🗺️ Estrategia Geográfica (Ciudad de México)</h3>\n<div class=\"grid\">\n");
    for zone in &business.zones {
        html.push_str(&format!("<div class=\"card\">\n    <h4>{}</h4>\n", escape_html(&zone.name)));
        html.push_str(&format!(
            "    <p><strong>Prioridad:</strong> <span class=\"badge {}\">{}</span></p>\n",
            zone.priority.tone().css_class(),
            zone.priority
        ));
        html.push_str(&format!("    <p><strong>Características:</strong> {}</p>\n", escape_html(&zone.profile)));
        html.push_str(&format!("    <p><strong>Estrategia:</strong> {}</p>\n", escape_html(&zone.approach)));
        html.push_str(&format!("    <p><strong>Estimado:</strong> {} clínicas</p>\n</div>\n", zone.clinics));
    }
    html.push_str("</div>\n\n");

    // Marketing channels
    let marketing = &business.marketing;
    html.push_str("<h3>📊 Canales de Marketing Digital</h3>\n<table>\n    <tr>\n");
    for header in ["Canal", "Inversión Mensual", "Objetivo", "KPI Principal"] {
        html.push_str(&format!("        <th>{}</th>\n", header));
    }
    html.push_str("    </tr>\n");
    for channel in &marketing.channels {
        html.push_str(&format!(
            "    <tr>\n        <td>{}</td>\n        <td>{} USD</td>\n        <td>{}</td>\n        <td>{}</td>\n    </tr>\n",
            escape_html(&channel.name),
            format_usd(channel.monthly_usd),
            escape_html(&channel.objective),
            escape_html(&channel.kpi)
        ));
    }
    html.push_str(&format!(
        "    <tr>\n        <th>TOTAL</th>\n        <th>{} USD/mes</th>\n        <th>{}</th>\n        <th>Conversión: {}</th>\n    </tr>\n</table>\n\n",
        format_usd(marketing.total_monthly_usd()),
        escape_html(&marketing.expected_leads),
        escape_html(&marketing.expected_conversion)
    ));

    write_chart_canvas(html, charts::MARKETING_CHANNELS_CHART);

    close_section(html);
}

fn write_script(html: &mut String, data: &AnalysisData<'_>) -> Result<()> {
    html.push_str("    <script>\n");
    html.push_str(&charts::chart_script(data)?);
    html.push_str(PAGE_JS);

    html.push_str(&format!(
        "\nconsole.log({}, 'color: #667eea; font-size: 16px; font-weight: bold;');\n",
        js_string(&format!("%c📊 Análisis {} generado exitosamente", data.product.name))?
    ));
    html.push_str("console.log('%cEste documento contiene análisis detallado de:', 'color: #666; font-size: 12px;');\n");
    let topics = [
        "Análisis técnico completo del proyecto".to_string(),
        format!("Comparación con {} competidores principales", data.competitors.len()),
        "Estimaciones de costos y proyecciones financieras".to_string(),
        "Plan de mercado y estrategia de ventas".to_string(),
        "Cuestionarios para estudio de mercado".to_string(),
        "Recomendaciones estratégicas".to_string(),
    ];
    for topic in &topics {
        html.push_str(&format!("console.log({});\n", js_string(&format!("  • {}", topic))?));
    }
    html.push_str("    </script>\n");

    Ok(())
}
