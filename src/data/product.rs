//! SisVet product profile

use crate::models::{BadgeTone, ProductProfile, QualityRating, TechGroup};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn sisvet_profile() -> ProductProfile {
    ProductProfile {
        name: "SisVet".to_string(),
        version: "1.0.0".to_string(),
        status: "Funcional - En desarrollo".to_string(),
        line_count: 6587,
        tech_stack: vec![
            TechGroup::new(
                "frontend",
                "Frontend",
                &["React 19.1.1", "Vite 6.0.5", "TailwindCSS 3.4.17", "Framer Motion 11.18.2"],
            ),
            TechGroup::new("backend", "Backend", &["Node.js", "Express 4.21.2", "MySQL2 3.12.0"]),
            TechGroup::new("auth", "Seguridad & Autenticación", &["JWT", "bcrypt 5.1.1"]),
            TechGroup::new("email", "Notificaciones", &["Nodemailer 6.10.1"]),
            TechGroup::new(
                "otros",
                "Herramientas Adicionales",
                &["node-cron 4.2.1", "ics 3.8.1", "yup 1.7.0"],
            ),
        ],
        modules: strings(&[
            "Gestión de Pacientes",
            "Historial Clínico (Consultas, Vacunas, Desparasitaciones, Alergias, Cirugías)",
            "Sistema de Citas",
            "Módulo de Estética/Grooming",
            "Gestión de Usuarios (Admin, Doctor, Recepción)",
            "Autenticación y Autorización",
            "Notificaciones por Email",
            "Recordatorios Automáticos (Cron Jobs)",
            "Dashboard con Analytics",
            "Búsqueda de Pacientes (Spotlight)",
            "Exportación a PDF/Excel",
            "Timeline Zoomable",
            "Modo Oscuro/Claro",
        ]),
        table_count: 35,
        completeness_pct: 85,
        strengths: strings(&[
            "Arquitectura moderna y escalable",
            "UI/UX profesional con animaciones",
            "Historial clínico muy completo",
            "Sistema de citas con recordatorios automáticos",
            "Módulo de estética diferenciador",
            "Exportación de datos flexible",
            "Sistema de búsqueda avanzado (Spotlight)",
            "Responsive design optimizado",
            "Base de datos bien estructurada con 35+ tablas",
            "Seguridad implementada (JWT, bcrypt, CORS)",
            "Timeline visual del historial",
            "Gráficas de evolución de pacientes",
        ]),
        weaknesses: strings(&[
            "Sin facturación electrónica",
            "Sin app móvil nativa",
            "Sin integración WhatsApp/SMS",
            "Sin módulo de inventario completo",
            "Sin sistema de telemedicina",
            "Sin multi-sede",
            "Sin integraciones con distribuidores",
            "Sin sistema de pagos en línea",
            "Sin módulo de contabilidad",
            "Sin reportes financieros avanzados",
            "Sin hospitalización completa",
            "Sin módulo de laboratorio",
            "Falta documentación técnica",
            "Sin tests automatizados",
        ]),
        quality: vec![
            QualityRating::new("Arquitectura", "Excelente", BadgeTone::Success, 90),
            QualityRating::new("Manejo de Errores", "Bueno", BadgeTone::Success, 80),
            QualityRating::new("Seguridad", "Bueno", BadgeTone::Success, 75),
            QualityRating::new("UI/UX", "Excelente", BadgeTone::Success, 88),
            QualityRating::new("Documentación", "Mejorable", BadgeTone::Warning, 40),
            QualityRating::new("Testing", "Inexistente", BadgeTone::Danger, 10),
        ],
    }
}
