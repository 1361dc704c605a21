//! Business plan figures. All values are hand-authored estimates.

use crate::models::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn criterion(name: &str, axis_label: &str, scores: [f32; 5]) -> FeatureCriterion {
    FeatureCriterion {
        name: name.to_string(),
        axis_label: axis_label.to_string(),
        scores: scores.to_vec(),
    }
}

fn dev_cost(concept: &str, hours: u32, rate_usd: u32) -> DevelopmentCost {
    DevelopmentCost {
        concept: concept.to_string(),
        hours,
        rate_usd,
    }
}

fn monthly(concept: &str, monthly_usd: u32) -> OperatingCost {
    OperatingCost {
        concept: concept.to_string(),
        monthly_usd,
    }
}

fn plan(icon: &str, name: &str, price_mxn: u32, approx_usd: u32, includes: &[&str], featured: bool) -> PricingPlan {
    PricingPlan {
        icon: icon.to_string(),
        name: name.to_string(),
        price_mxn,
        approx_usd,
        includes: strings(includes),
        featured,
    }
}

fn projection(period: &str, new_clients: u32, total_clients: u32, monthly_mxn: u32, cumulative_mxn: u32) -> ProjectionRow {
    ProjectionRow {
        period: period.to_string(),
        new_clients,
        total_clients,
        monthly_mxn,
        cumulative_mxn,
    }
}

fn zone(name: &str, priority: Priority, profile: &str, approach: &str, clinics: u32) -> SalesZone {
    SalesZone {
        name: name.to_string(),
        priority,
        profile: profile.to_string(),
        approach: approach.to_string(),
        clinics,
    }
}

fn channel(name: &str, chart_label: &str, monthly_usd: u32, objective: &str, kpi: &str) -> MarketingChannel {
    MarketingChannel {
        name: name.to_string(),
        chart_label: chart_label.to_string(),
        monthly_usd,
        objective: objective.to_string(),
        kpi: kpi.to_string(),
    }
}

fn feature_matrix() -> FeatureMatrix {
    let product = |column: &str, name: &str, on_radar: bool| ComparedProduct {
        column: column.to_string(),
        name: name.to_string(),
        on_radar,
    };

    FeatureMatrix {
        products: vec![
            product("SisVet", "SisVet", true),
            product("MyVete", "MyVete", false),
            product("Provet", "Provet Cloud", true),
            product("QVET", "QVET", true),
            product("GVET", "GVET", false),
        ],
        criteria: vec![
            criterion("Historial Clínico", "Historial Clínico", [9.5, 8.5, 9.0, 9.5, 8.0]),
            criterion("Sistema de Citas", "Sistema de Citas", [9.0, 8.5, 9.0, 8.5, 8.0]),
            criterion("Facturación Electrónica", "Facturación", [0.0, 9.0, 9.5, 9.5, 9.0]),
            criterion("Inventario", "Inventario", [4.0, 8.5, 9.0, 8.0, 8.5]),
            criterion("App Móvil", "App Móvil", [0.0, 7.0, 8.5, 8.0, 8.5]),
            criterion("WhatsApp/SMS", "WhatsApp/SMS", [0.0, 9.0, 8.5, 9.0, 9.5]),
            criterion("Telemedicina", "Telemedicina", [0.0, 5.0, 8.5, 9.0, 8.0]),
            criterion("Multi-sede", "Multi-sede", [0.0, 7.0, 9.5, 9.0, 8.5]),
            criterion("UI/UX Moderna", "UI/UX", [9.5, 8.0, 8.5, 7.5, 8.0]),
            criterion("Exportación Datos", "Exportación", [9.0, 7.5, 8.5, 8.0, 7.0]),
        ],
    }
}

fn cost_breakdown() -> CostBreakdown {
    CostBreakdown {
        development: vec![
            dev_cost("Análisis y Diseño", 80, 50),
            dev_cost("Desarrollo Backend (6,587 líneas)", 320, 50),
            dev_cost("Desarrollo Frontend", 280, 50),
            dev_cost("Base de Datos (35 tablas)", 60, 50),
            dev_cost("Testing y Debugging", 100, 40),
            dev_cost("UI/UX Design", 80, 60),
        ],
        infrastructure: vec![
            monthly("Servidor Cloud (AWS/DigitalOcean)", 150),
            monthly("Base de Datos (MySQL)", 50),
            monthly("CDN y Almacenamiento", 40),
            monthly("Email Service (SendGrid/Mailgun)", 30),
            monthly("Dominio y SSL", 10),
            monthly("Monitoreo y Analytics", 30),
            monthly("Backups y Seguridad", 40),
        ],
        operations: vec![
            monthly("Soporte Técnico (medio tiempo)", 800),
            monthly("Marketing Digital", 500),
            monthly("Desarrollo Continuo (mejoras)", 1000),
            monthly("Gastos Administrativos", 200),
        ],
    }
}

fn pricing_plans() -> Vec<PricingPlan> {
    vec![
        plan(
            "🌱",
            "Plan Starter",
            599,
            30,
            &["1 usuario", "Hasta 50 pacientes", "Historial clínico básico", "Agenda de citas", "Soporte por email"],
            false,
        ),
        plan(
            "🚀",
            "Plan Professional",
            1199,
            60,
            &[
                "3 usuarios",
                "Pacientes ilimitados",
                "Historial clínico completo",
                "Sistema de citas + recordatorios",
                "Módulo de estética",
                "Exportación PDF/Excel",
                "Soporte prioritario",
            ],
            true,
        ),
        plan(
            "💎",
            "Plan Enterprise",
            2499,
            125,
            &[
                "Usuarios ilimitados",
                "Pacientes ilimitados",
                "Todas las funcionalidades",
                "API access",
                "Personalización",
                "Capacitación incluida",
                "Soporte 24/7",
            ],
            false,
        ),
    ]
}

fn financial_projection() -> FinancialProjection {
    FinancialProjection {
        conservative: vec![
            projection("Mes 1-2 (Beta)", 5, 5, 5995, 11990),
            projection("Mes 3-4", 8, 21, 25179, 62348),
            projection("Mes 5-6", 10, 41, 49159, 160666),
            projection("Mes 7-9", 12, 77, 92323, 437635),
            projection("Mes 10-12", 15, 122, 146278, 876469),
        ],
        conservative_annual_usd: 43823,
        conservative_roi: "12-18 meses".to_string(),
        optimistic: OptimisticScenario {
            clinics: 250,
            mrr_mxn: 299750,
            mrr_usd: 14987,
            annual_mxn: 3597000,
            annual_usd: 179850,
            roi: "6-9 meses".to_string(),
        },
        series: RevenueSeries {
            months: (1..=12).map(|m| format!("Mes {}", m)).collect(),
            conservative_mxn: vec![
                5995, 11990, 19185, 25179, 37171, 49159, 67147, 80135, 92323, 116306, 131290, 146278,
            ],
            optimistic_mxn: vec![
                11990, 29975, 59950, 89925, 119900, 149875, 209825, 239800, 269775, 299750, 299750, 299750,
            ],
        },
    }
}

fn market_segments() -> Vec<MarketSegment> {
    let segment = |title: &str, traits: &[&str]| MarketSegment {
        title: title.to_string(),
        traits: strings(traits),
    };

    vec![
        segment(
            "Segmento Primario",
            &[
                "Clínicas veterinarias pequeñas (1-3 veterinarios)",
                "Facturación: $50K-$200K MXN/mes",
                "Ubicación: México (zonas urbanas)",
                "Sin software o con Excel",
                "Tamaño: ~15,000 clínicas en México",
            ],
        ),
        segment(
            "Segmento Secundario",
            &[
                "Clínicas medianas (4-8 veterinarios)",
                "Facturación: $200K-$500K MXN/mes",
                "Con software obsoleto o limitado",
                "Buscan modernizarse",
                "Tamaño: ~3,000 clínicas",
            ],
        ),
        segment(
            "Segmento de Nicho",
            &[
                "Estéticas y spas para mascotas",
                "Groomers independientes",
                "Sin software especializado",
                "Mercado desatendido",
                "Tamaño: ~5,000 negocios",
            ],
        ),
    ]
}

fn go_to_market_phases() -> Vec<GoToMarketPhase> {
    let phase = |title: &str, actions: &[&str]| GoToMarketPhase {
        title: title.to_string(),
        actions: strings(actions),
    };

    vec![
        phase(
            "Fase 1: Preparación (Mes 1-2)",
            &[
                "Completar funcionalidades críticas (facturación electrónica)",
                "Crear materiales de marketing (demos, videos, folletos)",
                "Configurar infraestructura de producción",
                "Establecer precios y términos de servicio",
                "Crear landing page y sitio web",
                "Configurar sistema de onboarding",
            ],
        ),
        phase(
            "Fase 2: Beta Testing (Mes 2-3)",
            &[
                "Reclutar 5-10 clínicas para beta (50% descuento)",
                "Recopilar feedback y ajustar producto",
                "Crear casos de éxito y testimoniales",
                "Optimizar proceso de onboarding",
                "Iterar basado en feedback real",
            ],
        ),
        phase(
            "Fase 3: Lanzamiento Suave (Mes 4-6)",
            &[
                "Marketing de contenidos (blog, redes sociales)",
                "Google Ads enfocado en \"software veterinario\"",
                "Meta Ads dirigido a veterinarios",
                "Networking en asociaciones veterinarias",
                "Objetivo: 30-50 clientes",
            ],
        ),
        phase(
            "Fase 4: Escalamiento (Mes 7-12)",
            &[
                "Programa de referidos (20% de descuento)",
                "Ventas directas door-to-door en zonas específicas",
                "Participación en eventos veterinarios",
                "Alianzas con distribuidores de productos veterinarios",
                "Objetivo: 100-150 clientes",
            ],
        ),
    ]
}

fn sales_objections() -> Vec<SalesObjection> {
    let objection = |objection: &str, answer: &str| SalesObjection {
        objection: objection.to_string(),
        answer: answer.to_string(),
    };

    vec![
        objection(
            "Es muy caro",
            "Entiendo su preocupación. Nuestros clientes recuperan la inversión en 2-3 meses gracias a mejor seguimiento y menos tiempo administrativo. Además, ofrecemos 30 días de prueba gratis.",
        ),
        objection(
            "Ya tengo un sistema",
            "Perfecto, ¿qué sistema usa actualmente? [Escuchar] Entiendo. Nuestros clientes que migraron de [X] reportan que SisVet les ahorra 40% del tiempo en historiales clínicos gracias a nuestra interfaz moderna. ¿Le gustaría comparar?",
        ),
        objection(
            "No tengo tiempo",
            "Precisamente por eso existe SisVet. Déjeme mostrarle en 5 minutos cómo puede ahorrar 2 horas diarias. ¿Prefiere mañana por la mañana o por la tarde?",
        ),
        objection(
            "Necesito pensarlo",
            "Por supuesto, es una decisión importante. ¿Qué información adicional necesita para tomar la decisión? Puedo dejarle una demo gratuita de 30 días sin compromiso.",
        ),
        objection(
            "No sé usar tecnología",
            "Excelente punto. SisVet está diseñado para ser tan simple como usar WhatsApp. Incluimos capacitación personalizada y soporte ilimitado. ¿Le muestro qué tan fácil es registrar una consulta?",
        ),
    ]
}

fn sales_zones() -> Vec<SalesZone> {
    vec![
        zone(
            "Zona 1: Polanco/Lomas",
            Priority::High,
            "Clínicas premium, mayor poder adquisitivo",
            "Pitch enfocado en imagen profesional y tecnología de punta",
            50,
        ),
        zone(
            "Zona 2: Condesa/Roma",
            Priority::High,
            "Dueños millennials, tech-savvy",
            "Enfoque en UI/UX moderna y eficiencia",
            70,
        ),
        zone(
            "Zona 3: Coyoacán/Del Valle",
            Priority::Medium,
            "Clínicas familiares establecidas",
            "Enfoque en ahorro de tiempo y mejores historiales",
            80,
        ),
        zone(
            "Zona 4: Iztapalapa/Neza",
            Priority::Low,
            "Clínicas de barrio, precio sensible",
            "Plan Starter con descuento",
            120,
        ),
    ]
}

fn marketing_plan() -> MarketingPlan {
    MarketingPlan {
        channels: vec![
            channel("Google Ads", "Google Ads", 200, "15-20 leads calificados", "CPA < $13 USD"),
            channel("Meta Ads (Facebook/Instagram)", "Meta Ads", 150, "10-15 leads", "CPA < $15 USD"),
            channel("LinkedIn Ads", "LinkedIn Ads", 100, "5-8 leads premium", "CPA < $20 USD"),
            channel(
                "Content Marketing (Blog/SEO)",
                "Content Marketing",
                50,
                "Tráfico orgánico",
                "1000 visitas/mes",
            ),
        ],
        expected_leads: "30-43 leads/mes".to_string(),
        expected_conversion: "25%".to_string(),
    }
}

pub(crate) fn business_plan() -> BusinessPlan {
    BusinessPlan {
        feature_matrix: feature_matrix(),
        costs: cost_breakdown(),
        plans: pricing_plans(),
        projection: financial_projection(),
        break_even: BreakEven {
            fixed_monthly_mxn: 57000,
            average_price_mxn: 1199,
            clients_needed: 48,
            time_to_reach: "5-7 meses".to_string(),
        },
        segments: market_segments(),
        phases: go_to_market_phases(),
        objections: sales_objections(),
        zones: sales_zones(),
        marketing: marketing_plan(),
    }
}
