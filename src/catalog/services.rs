use super::{ServiceDefinition, ServiceKey};
use crate::i18n::Localized;

pub const SERVICES: &[ServiceDefinition] = &[
    ServiceDefinition {
        key: ServiceKey::AcRepair,
        name: Localized::new("AC Repair", "Reparación de Aire Acondicionado"),
        slug: Localized::new("ac-repair", "reparacion-aire-acondicionado"),
        description: Localized::new(
            "Fast diagnosis and repair for central air conditioners of every make and model.",
            "Diagnóstico y reparación rápida de aires acondicionados centrales de todas las marcas y modelos.",
        ),
        image: Some("/images/services/ac-repair.jpg"),
    },
    ServiceDefinition {
        key: ServiceKey::HeatingRepair,
        name: Localized::new("Heating Repair", "Reparación de Calefacción"),
        slug: Localized::new("heating-repair", "reparacion-calefaccion"),
        description: Localized::new(
            "Furnace and heating system repair to keep your home warm all winter.",
            "Reparación de calefactores y sistemas de calefacción para mantener su hogar cálido todo el invierno.",
        ),
        image: Some("/images/services/heating-repair.jpg"),
    },
    ServiceDefinition {
        key: ServiceKey::HvacInstallation,
        name: Localized::new("HVAC Installation", "Instalación de HVAC"),
        slug: Localized::new("hvac-installation", "instalacion-hvac"),
        description: Localized::new(
            "High-efficiency system replacement sized correctly for your home.",
            "Reemplazo de sistemas de alta eficiencia con el tamaño adecuado para su hogar.",
        ),
        image: Some("/images/services/installation.jpg"),
    },
    ServiceDefinition {
        key: ServiceKey::HvacMaintenance,
        name: Localized::new("HVAC Maintenance", "Mantenimiento de HVAC"),
        slug: Localized::new("hvac-maintenance", "mantenimiento-hvac"),
        description: Localized::new(
            "Seasonal tune-ups that prevent breakdowns and lower energy bills.",
            "Mantenimiento de temporada que previene averías y reduce las facturas de energía.",
        ),
        image: Some("/images/services/maintenance.jpg"),
    },
    ServiceDefinition {
        key: ServiceKey::SameDayRepair,
        name: Localized::new("Same-Day Repair", "Reparación el Mismo Día"),
        slug: Localized::new("same-day-repair", "reparacion-mismo-dia"),
        description: Localized::new(
            "Call before noon and a technician will be at your door the same day.",
            "Llame antes del mediodía y un técnico llegará a su puerta el mismo día.",
        ),
        image: None,
    },
    ServiceDefinition {
        key: ServiceKey::EmergencyService,
        name: Localized::new("24/7 Emergency Service", "Servicio de Emergencia 24/7"),
        slug: Localized::new("emergency-service", "servicio-de-emergencia"),
        description: Localized::new(
            "Around-the-clock response when your heat or air fails.",
            "Respuesta a cualquier hora cuando falla su calefacción o aire acondicionado.",
        ),
        image: Some("/images/services/emergency.jpg"),
    },
    ServiceDefinition {
        key: ServiceKey::HeatPumpServices,
        name: Localized::new("Heat Pump Services", "Servicios de Bomba de Calor"),
        slug: Localized::new("heat-pump-services", "servicios-bomba-de-calor"),
        description: Localized::new(
            "Installation, repair and maintenance of heat pump systems.",
            "Instalación, reparación y mantenimiento de sistemas de bomba de calor.",
        ),
        image: None,
    },
    ServiceDefinition {
        key: ServiceKey::IndoorAirQuality,
        name: Localized::new("Indoor Air Quality", "Calidad del Aire Interior"),
        slug: Localized::new("indoor-air-quality", "calidad-del-aire-interior"),
        description: Localized::new(
            "Air purifiers, humidity control and filtration for a healthier home.",
            "Purificadores de aire, control de humedad y filtración para un hogar más saludable.",
        ),
        image: Some("/images/services/air-quality.jpg"),
    },
    ServiceDefinition {
        key: ServiceKey::DuctworkServices,
        name: Localized::new("Ductwork Services", "Servicios de Ductos"),
        slug: Localized::new("ductwork", "ductos"),
        description: Localized::new(
            "Duct inspection, sealing and replacement for even airflow.",
            "Inspección, sellado y reemplazo de ductos para un flujo de aire uniforme.",
        ),
        image: None,
    },
];
