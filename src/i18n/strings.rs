/// All localized user-facing strings for a locale
#[derive(Debug, Clone)]
pub struct LocaleStrings {
    // ==================== Site ====================
    /// Business name shown alongside page titles
    pub site_name: &'static str,

    /// Label of the link that switches to this language
    pub language_switch: &'static str,

    // ==================== Index Pages ====================
    pub home_title: &'static str,
    pub services_title: &'static str,
    pub locations_title: &'static str,

    /// Title of a compound local page
    /// Placeholders: {service}, {area}
    pub local_page_title: &'static str,

    /// Title of a service-area page
    /// Placeholders: {area}
    pub area_page_title: &'static str,

    // ==================== Not Found ====================
    pub not_found_title: &'static str,
    pub not_found_message: &'static str,

    /// Label of the link back to this locale's home page
    pub back_home: &'static str,

    // ==================== Contact Form ====================
    pub contact_success: &'static str,

    /// Shown when delivery fails; asks the visitor to try again
    pub contact_failure: &'static str,

    /// Shown when required fields are empty
    /// Placeholders: {fields}
    pub contact_missing_fields: &'static str,

    pub field_name: &'static str,
    pub field_email: &'static str,
    pub field_phone: &'static str,
    pub field_message: &'static str,
}

impl LocaleStrings {
    /// Fill in the `{service}` and `{area}` placeholders of `local_page_title`.
    pub fn local_title(&self, service: &str, area: &str) -> String {
        self.local_page_title
            .replace("{service}", service)
            .replace("{area}", area)
    }

    pub fn area_title(&self, area: &str) -> String {
        self.area_page_title.replace("{area}", area)
    }
}

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: LocaleStrings = LocaleStrings {
    site_name: "Magic City Heating & Air",
    language_switch: "English",

    home_title: "Heating & Air Conditioning in Birmingham, AL",
    services_title: "Our HVAC Services",
    locations_title: "Service Areas",
    local_page_title: "{service} in {area}, AL",
    area_page_title: "HVAC Services in {area}, AL",

    not_found_title: "Page Not Found",
    not_found_message: "Sorry, the page you are looking for does not exist or has moved.",
    back_home: "Back to Home",

    contact_success: "Thank you! Your message has been sent. We will contact you shortly.",
    contact_failure: "We could not send your message. Please try again or call us directly.",
    contact_missing_fields: "Please fill in all required fields: {fields}",

    field_name: "Name",
    field_email: "Email",
    field_phone: "Phone",
    field_message: "Message",
};

// ==================== Spanish Strings ====================

pub const SPANISH_STRINGS: LocaleStrings = LocaleStrings {
    site_name: "Magic City Heating & Air",
    language_switch: "Español",

    home_title: "Calefacción y Aire Acondicionado en Birmingham, AL",
    services_title: "Nuestros Servicios de HVAC",
    locations_title: "Áreas de Servicio",
    local_page_title: "{service} en {area}, AL",
    area_page_title: "Servicios de HVAC en {area}, AL",

    not_found_title: "Página No Encontrada",
    not_found_message: "Lo sentimos, la página que busca no existe o ha sido movida.",
    back_home: "Volver al Inicio",

    contact_success: "¡Gracias! Su mensaje ha sido enviado. Nos comunicaremos con usted pronto.",
    contact_failure: "No pudimos enviar su mensaje. Por favor, inténtelo de nuevo o llámenos directamente.",
    contact_missing_fields: "Por favor complete todos los campos obligatorios: {fields}",

    field_name: "Nombre",
    field_email: "Correo electrónico",
    field_phone: "Teléfono",
    field_message: "Mensaje",
};
