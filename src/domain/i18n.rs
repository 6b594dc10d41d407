//! Localized interface strings for the two supported languages.

use super::models::Language;

/// Every user-facing string that changes with the active language.
#[derive(Debug)]
pub struct Labels {
    pub title: &'static str,
    pub your_name: &'static str,
    pub company_name: &'static str,
    pub your_skills: &'static str,
    pub interest_placeholder: &'static str,
    pub add_interest: &'static str,
    pub generate_button: &'static str,
    pub export_button: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub add_link: &'static str,
    pub copy_success: &'static str,
    pub copy_failure: &'static str,
    pub preview: &'static str,
    pub preview_placeholder: &'static str,
    pub export_success: &'static str,
    pub export_failure: &'static str,
    pub link_locked: &'static str,
    pub form_title: &'static str,
    pub status_title: &'static str,
    pub locked_tag: &'static str,
    pub locked_link_hint: &'static str,
    pub unlocked_link_hint: &'static str,
    pub editing_hint: &'static str,
    pub help_hint: &'static str,
    pub normal_hint: &'static str,
    pub notice_hint: &'static str,
    pub press_any_key: &'static str,
}

/// Placeholder for custom links. Not localized.
pub const CUSTOM_LINK_PLACEHOLDER: &str = "Custom link";

static EN: Labels = Labels {
    title: "Job Application Helper",
    your_name: "Your name",
    company_name: "Company name",
    your_skills: "Your skills",
    interest_placeholder: "Why are you interested in this company?",
    add_interest: "Add interest in company (optional)",
    generate_button: "Generate Cover Letter",
    export_button: "Export PDF",
    github: "GitHub link",
    linkedin: "LinkedIn link",
    add_link: "+ Add Link",
    copy_success: "Link copied!",
    copy_failure: "Failed to copy",
    preview: "Preview",
    preview_placeholder: "Your cover letter will appear here.",
    export_success: "Saved to",
    export_failure: "Export failed",
    link_locked: "Link is locked. Press u to edit it.",
    form_title: "Form",
    status_title: "Status",
    locked_tag: "[locked]",
    locked_link_hint: "c: copy  u: edit",
    unlocked_link_hint: "L: lock",
    editing_hint: "Enter: save | Esc: cancel",
    help_hint: "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help",
    normal_hint: "F1/?: help | q: quit",
    notice_hint: "Press any key to continue",
    press_any_key: "Press any key",
};

static PT: Labels = Labels {
    title: "Assistente de Candidatura",
    your_name: "Seu nome",
    company_name: "Nome da empresa",
    your_skills: "Suas competências",
    interest_placeholder: "Por que você está interessado nesta empresa?",
    add_interest: "Adicionar interesse na empresa (opcional)",
    generate_button: "Gerar Carta de Apresentação",
    export_button: "Exportar PDF",
    github: "Link do GitHub",
    linkedin: "Link do LinkedIn",
    add_link: "+ Adicionar Link",
    copy_success: "Link copiado!",
    copy_failure: "Falha ao copiar",
    preview: "Pré-visualização",
    preview_placeholder: "A sua carta aparecerá aqui.",
    export_success: "Guardado em",
    export_failure: "Falha na exportação",
    link_locked: "Link bloqueado. Prima u para editar.",
    form_title: "Formulário",
    status_title: "Estado",
    locked_tag: "[bloqueado]",
    locked_link_hint: "c: copiar  u: editar",
    unlocked_link_hint: "L: bloquear",
    editing_hint: "Enter: guardar | Esc: cancelar",
    help_hint: "↑↓/jk: deslocar | PgUp/PgDn: deslocar rápido | Home: início | Esc/q: fechar ajuda",
    normal_hint: "F1/?: ajuda | q: sair",
    notice_hint: "Prima qualquer tecla para continuar",
    press_any_key: "Prima qualquer tecla",
};

impl Language {
    pub fn labels(self) -> &'static Labels {
        match self {
            Language::En => &EN,
            Language::Pt => &PT,
        }
    }
}
