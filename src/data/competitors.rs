//! Competitor profiles, in report order

use crate::models::CompetitorProfile;

pub(crate) fn competitor_profiles() -> Vec<CompetitorProfile> {
    vec![
        CompetitorProfile::new("MyVete", "México/Latam")
            .with_price("MXN", 800, 3000)
            .with_usd_price(40, 150)
            .with_trial("30 días gratis")
            .with_rating(8.5, 15)
            .with_features(&[
                "Dictado por voz",
                "Datos multimedia (fotos, videos)",
                "Recordatorios automáticos (Email, SMS, WhatsApp)",
                "Facturación electrónica",
                "Control de inventario",
                "Gestión de proveedores",
                "Cola de espera en tiempo real",
                "Internación y guardería",
                "Mutualismo/Obra Social",
                "Reportes y estadísticas",
                "Multi-dispositivo",
            ]),
        CompetitorProfile::new("Provet Cloud", "Global")
            .with_price("MXN", 1000, 8000)
            .with_usd_price(50, 400)
            .with_trial("Demo personalizada")
            .with_rating(9.0, 20)
            .with_features(&[
                "IA Clínica (escritura asistida)",
                "Recordatorios automáticos",
                "CRM centralizado",
                "Facturación e integración contable",
                "Control de stock multi-sede",
                "Reservas online",
                "Integración con laboratorios",
                "Telemedicina",
                "Reportes avanzados",
                "Multi-sede",
            ]),
        CompetitorProfile::new("Panther", "México")
            .with_price("MXN", 600, 2000)
            .with_usd_price(30, 100)
            .with_trial("Prueba gratuita")
            .with_rating(7.5, 10)
            .with_features(&[
                "Agendamiento rápido",
                "Consultas médicas",
                "Prescripciones",
                "Signos vitales",
                "Exámenes y radiografías",
                "App móvil (PantherPet)",
                "Notificaciones Apple Watch",
                "Sincronización cloud",
            ]),
        CompetitorProfile::new("OKVet", "Colombia/Latam")
            .with_price("MXN", 0, 2060)
            .with_usd_price(0, 103)
            .with_trial("Versión gratuita")
            .with_rating(7.8, 12)
            .with_features(&[
                "Historia clínica especializada",
                "Agenda colaborativa",
                "Facturación electrónica (DIAN)",
                "Hospitalización y ambulatorios",
                "Kardex de medicamentos",
                "Ventas e inventario",
                "Marketing (SMS/WhatsApp)",
                "Versión GRATUITA disponible",
                "Informes en tiempo real",
            ]),
        CompetitorProfile::new("GVET", "Argentina/Latam")
            .with_price("MXN", 400, 1500)
            .with_usd_price(20, 75)
            .with_trial("3 meses gratis")
            .with_rating(8.0, 14)
            .with_features(&[
                "Multi-dispositivo",
                "App móvil para clientes",
                "Facturación electrónica (7 países)",
                "Integración WhatsApp",
                "Telemedicina",
                "Multi-sucursal",
                "Hospitalización remota",
                "Control de stock",
                "Interfaz intuitiva",
            ]),
        CompetitorProfile::new("Sami.vet", "Latam")
            .with_price("MXN", 500, 2500)
            .with_usd_price(25, 125)
            .with_trial("Demo disponible")
            .with_rating(8.2, 8)
            .with_features(&[
                "Punto de venta",
                "Control de inventarios",
                "Gestión financiera",
                "Agendas y citas",
                "Expedientes digitales",
                "100% en la nube",
                "Envío de recetas a clientes",
                "Evaluación de visitas",
                "Reportes financieros",
            ]),
        CompetitorProfile::new("QVET", "España/Global")
            .with_price("MXN", 1500, 5000)
            .with_usd_price(75, 250)
            .with_trial("Demo personalizada")
            .with_rating(9.2, 18)
            .with_features(&[
                "29 años de experiencia",
                "8000+ clientes en 31 países",
                "Facturación electrónica (11 países)",
                "Dictado por voz avanzado",
                "Integración financiera (Frakmenta)",
                "Videoconsulta",
                "Soporte 24/7",
                "Webinars semanales",
                "Migración gratuita",
                "Integraciones con distribuidores",
            ]),
        CompetitorProfile::new("SaelVet", "Latam")
            .with_price("MXN", 600, 2200)
            .with_usd_price(30, 110)
            .with_trial("Prueba disponible")
            .with_rating(7.6, 3)
            .with_features(&[
                "Modelo SAAS",
                "Datacenter SOC 2 tipo II",
                "Backup diario",
                "99.6% uptime",
                "Conexión HTTPS",
                "Bootstrap 4",
                "Soporte 24 horas",
                "Gestión administrativa",
            ]),
    ]
}
