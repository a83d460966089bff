//! Fixed prose templates keyed by tone and output length.
//!
//! Each template receives the topic verbatim and an excerpt of the input
//! that has already been cut to the length tier's limit and suffixed with
//! [`ELLIPSIS`].

use crate::types::{OutputLength, Tone};

pub const ELLIPSIS: &str = "...";

type Template = fn(topic: &str, excerpt: &str) -> String;

/// Number of characters of the input kept in the excerpt.
pub fn excerpt_limit(output_length: OutputLength) -> usize {
    match output_length {
        OutputLength::Short => 80,
        OutputLength::Medium => 100,
        OutputLength::Long => 120,
    }
}

/// First `limit` characters of `input`. Counts Unicode scalar values, so a
/// multi-byte character is never split.
pub fn truncate(input: &str, limit: usize) -> &str {
    match input.char_indices().nth(limit) {
        Some((byte_offset, _)) => &input[..byte_offset],
        None => input,
    }
}

pub fn render(topic: &str, tone: Tone, output_length: OutputLength, input: &str) -> String {
    let mut excerpt = truncate(input, excerpt_limit(output_length)).to_string();
    excerpt.push_str(ELLIPSIS);
    template_for(tone, output_length)(topic, &excerpt)
}

fn template_for(tone: Tone, output_length: OutputLength) -> Template {
    match (tone, output_length) {
        (Tone::Friendly, OutputLength::Short) => friendly_short,
        (Tone::Friendly, OutputLength::Medium) => friendly_medium,
        (Tone::Friendly, OutputLength::Long) => friendly_long,
        (Tone::Professional, OutputLength::Short) => professional_short,
        (Tone::Professional, OutputLength::Medium) => professional_medium,
        (Tone::Professional, OutputLength::Long) => professional_long,
        (Tone::Direct, OutputLength::Short) => direct_short,
        (Tone::Direct, OutputLength::Medium) => direct_medium,
        (Tone::Direct, OutputLength::Long) => direct_long,
    }
}

fn friendly_short(topic: &str, excerpt: &str) -> String {
    format!("Hey there! Here's a quick note about {topic}: {excerpt} Hope this helps!")
}

fn friendly_medium(topic: &str, excerpt: &str) -> String {
    format!(
        "Hi there!\n\n\
         I wanted to share a few thoughts about {topic}. Here's what I've got so far: {excerpt}\n\n\
         Let me know what you think. I'm always happy to chat more about it!"
    )
}

fn friendly_long(topic: &str, excerpt: &str) -> String {
    format!(
        "Hi there!\n\n\
         Thanks so much for taking the time to look into {topic} with me. \
         I've been thinking about it a lot, and here's where things stand:\n\n\
         {excerpt}\n\n\
         I think there's real potential here, and I'd love to hear your take on {topic} \
         before we move ahead.\n\n\
         Talk soon, and have a great day!"
    )
}

fn professional_short(topic: &str, excerpt: &str) -> String {
    format!("Regarding {topic}: {excerpt} Please advise if further information is required.")
}

fn professional_medium(topic: &str, excerpt: &str) -> String {
    format!(
        "Dear Colleague,\n\n\
         This message concerns {topic}. The relevant details are summarized below: {excerpt}\n\n\
         Please do not hesitate to reach out should any clarification be required.\n\n\
         Kind regards"
    )
}

fn professional_long(topic: &str, excerpt: &str) -> String {
    format!(
        "Dear Colleague,\n\n\
         The purpose of this communication is to provide an overview of {topic}. \
         The following summary reflects the information currently available:\n\n\
         {excerpt}\n\n\
         The team will continue to monitor developments related to {topic} \
         and will share updates as they become available.\n\n\
         Should you require any further details, please contact the team directly.\n\n\
         Kind regards"
    )
}

fn direct_short(topic: &str, excerpt: &str) -> String {
    format!("Re: {topic} - {excerpt}")
}

fn direct_medium(topic: &str, excerpt: &str) -> String {
    format!(
        "Subject: {topic}\n\n\
         Key points:\n\
         - {excerpt}\n\n\
         Action: review and respond."
    )
}

fn direct_long(topic: &str, excerpt: &str) -> String {
    format!(
        "Subject: {topic}\n\n\
         RE: {topic}\n\n\
         Summary:\n\
         - {excerpt}\n\n\
         Next steps:\n\
         - Review the points above\n\
         - Confirm an owner for {topic}\n\
         - Reply with blockers\n\n\
         Deadline: end of week."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(n: usize) -> String {
        "abcdefghij".chars().cycle().take(n).collect()
    }

    #[test]
    fn truncate_keeps_short_input_whole() {
        assert_eq!(truncate("hello", 80), "hello");
        assert_eq!(truncate("", 80), "");
    }

    #[test]
    fn truncate_cuts_at_exact_character_count() {
        let input = chars(200);
        assert_eq!(truncate(&input, 80).chars().count(), 80);
        assert_eq!(truncate(&input, 80), &input[..80]);
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        let input = "é".repeat(90);
        let cut = truncate(&input, 80);
        assert_eq!(cut.chars().count(), 80);
        assert_eq!(cut.len(), 160);
    }

    #[test]
    fn excerpt_at_threshold_is_the_whole_input() {
        let exactly = chars(80);
        let output = render("T", Tone::Direct, OutputLength::Short, &exactly);
        assert_eq!(output, format!("Re: T - {exactly}..."));

        let one_over = chars(81);
        let output = render("T", Tone::Direct, OutputLength::Short, &one_over);
        assert_eq!(output, format!("Re: T - {}...", &one_over[..80]));
    }

    #[test]
    fn each_tier_uses_its_limit() {
        let input = chars(300);
        for tone in Tone::ALL {
            for length in OutputLength::ALL {
                let limit = excerpt_limit(length);
                let output = render("Topic", tone, length, &input);
                let expected = format!("{}{}", &input[..limit], ELLIPSIS);
                assert!(output.contains(&expected), "{tone}/{length}");
                let too_long = format!("{}{}", &input[..limit + 1], ELLIPSIS);
                assert!(!output.contains(&too_long), "{tone}/{length}");
            }
        }
    }

    #[test]
    fn render_is_deterministic() {
        let input = chars(150);
        for tone in Tone::ALL {
            for length in OutputLength::ALL {
                assert_eq!(
                    render("Same", tone, length, &input),
                    render("Same", tone, length, &input)
                );
            }
        }
    }

    #[test]
    fn all_nine_templates_are_distinct() {
        let mut outputs = Vec::new();
        for tone in Tone::ALL {
            for length in OutputLength::ALL {
                outputs.push(render("Topic", tone, length, "input"));
            }
        }
        outputs.sort();
        outputs.dedup();
        assert_eq!(outputs.len(), 9);
    }

    #[test]
    fn short_tier_is_a_single_paragraph() {
        for tone in Tone::ALL {
            let output = render("Topic", tone, OutputLength::Short, "input");
            assert!(!output.contains("\n\n"), "{tone}");
        }
    }

    #[test]
    fn medium_and_long_tiers_have_paragraphs() {
        for tone in Tone::ALL {
            for length in [OutputLength::Medium, OutputLength::Long] {
                let output = render("Topic", tone, length, "input");
                assert!(output.split("\n\n").count() >= 3, "{tone}/{length}");
            }
        }
    }

    #[test]
    fn topic_is_embedded_verbatim() {
        let topic = "<b>Q4 & \"roadmap\"</b>";
        for tone in Tone::ALL {
            for length in OutputLength::ALL {
                assert!(render(topic, tone, length, "x").contains(topic));
            }
        }
    }

    #[test]
    fn direct_labels() {
        assert!(render("Plan", Tone::Direct, OutputLength::Short, "x").starts_with("Re: Plan"));
        assert!(render("Plan", Tone::Direct, OutputLength::Medium, "x").starts_with("Subject: Plan"));
        let long = render("Plan", Tone::Direct, OutputLength::Long, "x");
        assert!(long.contains("RE: Plan"));
        assert!(long.contains("\n- x..."));
    }

    #[test]
    fn friendly_short_fixture() {
        assert_eq!(
            render("the launch", Tone::Friendly, OutputLength::Short, "We ship Monday."),
            "Hey there! Here's a quick note about the launch: We ship Monday.... Hope this helps!"
        );
    }

    #[test]
    fn professional_medium_fixture() {
        assert_eq!(
            render("Budget", Tone::Professional, OutputLength::Medium, "Costs are flat."),
            "Dear Colleague,\n\n\
             This message concerns Budget. The relevant details are summarized below: Costs are flat....\n\n\
             Please do not hesitate to reach out should any clarification be required.\n\n\
             Kind regards"
        );
    }
}
