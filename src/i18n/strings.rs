use super::Language;

/// User-facing copy for one language. Everything the pipeline ever puts
/// into a response body comes from here; diagnostic detail stays in the
/// server log.
pub struct Strings {
    pub success: &'static str,
    pub missing_fields: &'static str,
    pub name_too_short: &'static str,
    pub email_invalid: &'static str,
    pub instagram_required: &'static str,
    pub age_required: &'static str,
    pub status_required: &'static str,
    pub message_too_short: &'static str,
    pub adult_required: &'static str,
    pub too_many_files: &'static str,
    pub max_images: &'static str,
    pub unsupported_type: &'static str,
    pub only_images: &'static str,
    pub total_too_large: &'static str,
    pub max_total_size: &'static str,
    pub upload_failed: &'static str,
    pub send_failed: &'static str,
    pub server_error: &'static str,
}

pub fn for_language(lang: Language) -> &'static Strings {
    match lang {
        Language::De => &DE,
        Language::En => &EN,
        Language::Es => &ES,
        Language::Fr => &FR,
        Language::It => &IT,
        Language::Pt => &PT,
    }
}

// German is the reference wording; the site launched German-first.
static DE: Strings = Strings {
    success: "Bewerbung erfolgreich gesendet!",
    missing_fields: "Bitte alle Pflichtfelder ausfüllen.",
    name_too_short: "Name zu kurz",
    email_invalid: "Ungültige E-Mail",
    instagram_required: "Instagram erforderlich",
    age_required: "Alter erforderlich",
    status_required: "Bitte Status wählen",
    message_too_short: "Nachricht zu kurz",
    adult_required: "Bestätigung erforderlich (18+).",
    too_many_files: "Zu viele Dateien (Max. 4).",
    max_images: "Max. 4 Bilder.",
    unsupported_type: "Typ nicht unterstützt",
    only_images: "Nur JPG, PNG, WebP.",
    total_too_large: "Gesamtgröße zu hoch (Max. 25MB).",
    max_total_size: "Max. 25MB Gesamtgröße.",
    upload_failed: "Fehler beim Bild-Upload.",
    send_failed: "Fehler beim Senden der E-Mail.",
    server_error: "Server Fehler.",
};

static EN: Strings = Strings {
    success: "Application sent successfully!",
    missing_fields: "Please fill in all required fields.",
    name_too_short: "Name too short",
    email_invalid: "Invalid email",
    instagram_required: "Instagram required",
    age_required: "Age required",
    status_required: "Please choose a status",
    message_too_short: "Message too short",
    adult_required: "Confirmation required (18+).",
    too_many_files: "Too many files (max. 4).",
    max_images: "Max. 4 images.",
    unsupported_type: "Unsupported file type",
    only_images: "Only JPG, PNG, WebP.",
    total_too_large: "Total size too large (max. 25MB).",
    max_total_size: "Max. 25MB in total.",
    upload_failed: "Photo upload failed.",
    send_failed: "Failed to send the email.",
    server_error: "Server error.",
};

static ES: Strings = Strings {
    success: "¡Solicitud enviada con éxito!",
    missing_fields: "Por favor, rellena todos los campos obligatorios.",
    name_too_short: "Nombre demasiado corto",
    email_invalid: "Correo electrónico no válido",
    instagram_required: "Instagram obligatorio",
    age_required: "Edad obligatoria",
    status_required: "Por favor, elige un estado",
    message_too_short: "Mensaje demasiado corto",
    adult_required: "Confirmación obligatoria (18+).",
    too_many_files: "Demasiados archivos (máx. 4).",
    max_images: "Máx. 4 imágenes.",
    unsupported_type: "Tipo de archivo no compatible",
    only_images: "Solo JPG, PNG, WebP.",
    total_too_large: "Tamaño total excesivo (máx. 25MB).",
    max_total_size: "Máx. 25MB en total.",
    upload_failed: "Error al subir las fotos.",
    send_failed: "Error al enviar el correo.",
    server_error: "Error del servidor.",
};

static FR: Strings = Strings {
    success: "Candidature envoyée avec succès !",
    missing_fields: "Veuillez remplir tous les champs obligatoires.",
    name_too_short: "Nom trop court",
    email_invalid: "E-mail invalide",
    instagram_required: "Instagram requis",
    age_required: "Âge requis",
    status_required: "Veuillez choisir un statut",
    message_too_short: "Message trop court",
    adult_required: "Confirmation requise (18+).",
    too_many_files: "Trop de fichiers (max. 4).",
    max_images: "Max. 4 images.",
    unsupported_type: "Type de fichier non pris en charge",
    only_images: "JPG, PNG, WebP uniquement.",
    total_too_large: "Taille totale trop élevée (max. 25MB).",
    max_total_size: "Max. 25MB au total.",
    upload_failed: "Échec du téléversement des photos.",
    send_failed: "Échec de l'envoi de l'e-mail.",
    server_error: "Erreur serveur.",
};

static IT: Strings = Strings {
    success: "Candidatura inviata con successo!",
    missing_fields: "Compila tutti i campi obbligatori.",
    name_too_short: "Nome troppo corto",
    email_invalid: "E-mail non valida",
    instagram_required: "Instagram obbligatorio",
    age_required: "Età obbligatoria",
    status_required: "Seleziona uno stato",
    message_too_short: "Messaggio troppo corto",
    adult_required: "Conferma obbligatoria (18+).",
    too_many_files: "Troppi file (max. 4).",
    max_images: "Max. 4 immagini.",
    unsupported_type: "Tipo di file non supportato",
    only_images: "Solo JPG, PNG, WebP.",
    total_too_large: "Dimensione totale eccessiva (max. 25MB).",
    max_total_size: "Max. 25MB in totale.",
    upload_failed: "Errore durante il caricamento delle foto.",
    send_failed: "Errore durante l'invio dell'e-mail.",
    server_error: "Errore del server.",
};

static PT: Strings = Strings {
    success: "Candidatura enviada com sucesso!",
    missing_fields: "Preencha todos os campos obrigatórios.",
    name_too_short: "Nome demasiado curto",
    email_invalid: "E-mail inválido",
    instagram_required: "Instagram obrigatório",
    age_required: "Idade obrigatória",
    status_required: "Escolha um estado",
    message_too_short: "Mensagem demasiado curta",
    adult_required: "Confirmação obrigatória (18+).",
    too_many_files: "Demasiados ficheiros (máx. 4).",
    max_images: "Máx. 4 imagens.",
    unsupported_type: "Tipo de ficheiro não suportado",
    only_images: "Apenas JPG, PNG, WebP.",
    total_too_large: "Tamanho total excessivo (máx. 25MB).",
    max_total_size: "Máx. 25MB no total.",
    upload_failed: "Erro ao carregar as fotos.",
    send_failed: "Erro ao enviar o e-mail.",
    server_error: "Erro do servidor.",
};
