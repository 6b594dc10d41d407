//! Cover letter generation.
//!
//! The letter is a fixed template per language with one randomly chosen
//! opening sentence. Randomness comes through [`RandomSource`] so callers can
//! pin the choice.

use rand::Rng;

use super::models::{FormState, Language};

/// Number of opening sentence variants per language.
pub const OPENING_VARIANTS: usize = 3;

/// Chooses an index uniformly from `0..len`.
pub trait RandomSource {
    fn pick(&mut self, len: usize) -> usize;
}

/// Adapts any [`rand::Rng`] into a [`RandomSource`].
#[derive(Debug)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Language-specific phrasing around the user's values.
struct Template {
    salutation: fn(&str) -> String,
    openings: [fn(&str) -> String; OPENING_VARIANTS],
    skills_intro: &'static str,
    interest_intro: &'static str,
    closing: &'static str,
}

static EN_TEMPLATE: Template = Template {
    salutation: |company| format!("Dear Hiring Team at {company},"),
    openings: [
        |company| format!("I am excited to apply for an opportunity at {company}."),
        |company| {
            format!("I was impressed by {company}'s mission and would like to contribute to your team.")
        },
        |company| {
            format!("I believe {company} is a great place to grow professionally and make an impact.")
        },
    ],
    skills_intro: "My background includes",
    interest_intro: "In addition,",
    closing: "Best regards,",
};

static PT_TEMPLATE: Template = Template {
    salutation: |company| format!("Exmos. recrutadores da {company},"),
    openings: [
        |company| format!("Gostaria de me candidatar a uma oportunidade na {company}."),
        |company| {
            format!(
                "Fiquei impressionado com a missão da {company} e gostaria de contribuir para a vossa equipa."
            )
        },
        |company| {
            format!(
                "Acredito que a {company} é um excelente lugar para crescer profissionalmente e gerar impacto."
            )
        },
    ],
    skills_intro: "Tenho experiência em",
    interest_intro: "Além disso,",
    closing: "Com os melhores cumprimentos,",
};

fn template_for(language: Language) -> &'static Template {
    match language {
        Language::En => &EN_TEMPLATE,
        Language::Pt => &PT_TEMPLATE,
    }
}

/// Builds cover letters from a [`FormState`].
///
/// # Examples
///
/// ```
/// use jobhelper::domain::{FormState, LetterGenerator, RandomSource};
///
/// struct First;
/// impl RandomSource for First {
///     fn pick(&mut self, _len: usize) -> usize { 0 }
/// }
///
/// let mut form = FormState::default();
/// form.name = "Ana".to_string();
/// form.company = "Acme".to_string();
/// form.skills.en = "Rust".to_string();
///
/// let letter = LetterGenerator::generate(&form, &mut First);
/// assert_eq!(
///     letter,
///     "Dear Hiring Team at Acme,\n\nI am excited to apply for an opportunity at Acme. \
///      My background includes Rust.\n\nBest regards,\nAna"
/// );
/// ```
pub struct LetterGenerator;

impl LetterGenerator {
    pub fn generate(form: &FormState, random: &mut dyn RandomSource) -> String {
        let template = template_for(form.language);
        let company = form.company.as_str();
        let choice = random.pick(OPENING_VARIANTS).min(OPENING_VARIANTS - 1);
        let opening = (template.openings[choice])(company);

        let interest = form.active_interest();
        let interest_clause = if form.include_interest && !interest.is_empty() {
            format!("\n{} {}.", template.interest_intro, interest)
        } else {
            String::new()
        };

        format!(
            "{}\n\n{} {} {}.{}\n\n{}\n{}",
            (template.salutation)(company),
            opening,
            template.skills_intro,
            form.active_skills(),
            interest_clause,
            template.closing,
            form.name,
        )
    }

    /// All opening sentences `generate` may choose from for `language`.
    pub fn openings(language: Language, company: &str) -> Vec<String> {
        template_for(language)
            .openings
            .iter()
            .map(|opening| opening(company))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    struct Fixed(usize);

    impl RandomSource for Fixed {
        fn pick(&mut self, _len: usize) -> usize {
            self.0
        }
    }

    fn sample_form(language: Language) -> FormState {
        let mut form = FormState::new(language);
        form.name = "Ana".to_string();
        form.company = "Acme".to_string();
        form.skills.en = "automated testing".to_string();
        form.skills.pt = "testes automatizados".to_string();
        form
    }

    #[test]
    fn test_portuguese_letter_end_to_end() {
        let form = sample_form(Language::Pt);
        let letter = LetterGenerator::generate(&form, &mut Fixed(1));

        assert!(letter.starts_with("Exmos. recrutadores da Acme,"));
        assert!(letter.contains("Tenho experiência em testes automatizados."));
        assert!(letter.ends_with("Com os melhores cumprimentos,\nAna"));
        assert!(!letter.contains("Além disso"));
    }

    #[test]
    fn test_english_letter_layout() {
        let form = sample_form(Language::En);
        let letter = LetterGenerator::generate(&form, &mut Fixed(2));

        assert_eq!(
            letter,
            "Dear Hiring Team at Acme,\n\n\
             I believe Acme is a great place to grow professionally and make an impact. \
             My background includes automated testing.\n\n\
             Best regards,\nAna"
        );
    }

    #[test]
    fn test_interest_clause_requires_flag_and_text() {
        let mut form = sample_form(Language::En);
        form.interest.en = "I admire your open source work".to_string();

        form.include_interest = false;
        let letter = LetterGenerator::generate(&form, &mut Fixed(0));
        assert!(!letter.contains("In addition"));
        assert!(!letter.contains("open source"));

        form.include_interest = true;
        let letter = LetterGenerator::generate(&form, &mut Fixed(0));
        assert!(letter.contains("automated testing.\nIn addition, I admire your open source work.\n\nBest regards,"));

        form.interest.en.clear();
        let letter = LetterGenerator::generate(&form, &mut Fixed(0));
        assert!(!letter.contains("In addition"));
        assert!(letter.contains("automated testing.\n\nBest regards,"));
    }

    #[test]
    fn test_interest_uses_active_language_slot() {
        let mut form = sample_form(Language::Pt);
        form.include_interest = true;
        form.interest.en = "only english".to_string();

        let letter = LetterGenerator::generate(&form, &mut Fixed(0));
        assert!(!letter.contains("Além disso"));

        form.interest.pt = "admiro a vossa cultura".to_string();
        let letter = LetterGenerator::generate(&form, &mut Fixed(0));
        assert!(letter.contains("\nAlém disso, admiro a vossa cultura."));
    }

    #[test]
    fn test_opening_is_always_a_known_variant() {
        let form = sample_form(Language::En);
        let openings = LetterGenerator::openings(Language::En, "Acme");
        assert_eq!(openings.len(), 3);

        let mut random = RngSource(StdRng::seed_from_u64(42));
        let mut seen = [false; OPENING_VARIANTS];
        for _ in 0..200 {
            let letter = LetterGenerator::generate(&form, &mut random);
            let body = letter.split("\n\n").nth(1).unwrap();
            let index = openings
                .iter()
                .position(|opening| body.starts_with(opening.as_str()))
                .expect("opening sentence must be one of the variants");
            seen[index] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_empty_inputs_still_produce_a_letter() {
        let form = FormState::default();
        let letter = LetterGenerator::generate(&form, &mut Fixed(0));
        assert_eq!(
            letter,
            "Dear Hiring Team at ,\n\nI am excited to apply for an opportunity at . \
             My background includes .\n\nBest regards,\n"
        );
    }

    #[test]
    fn test_out_of_range_pick_is_clamped() {
        let form = sample_form(Language::En);
        let letter = LetterGenerator::generate(&form, &mut Fixed(99));
        assert!(letter.contains("I believe Acme is a great place"));
    }
}
