use html_escape::{encode_double_quoted_attribute, encode_text};
use reqwest::Url;

use super::PromptAction;
use crate::models::{Announcement, Review, ReviewAction};

/// Public page for a module, e.g. `<base>/CS201`.
pub fn module_link(base: &Url, code: &str) -> String {
    let mut link = base.clone();
    match link.path_segments_mut() {
        Ok(mut segments) => {
            segments.pop_if_empty().push(code);
        }
        Err(()) => return format!("{}/{}", base.as_str().trim_end_matches('/'), code),
    }
    link.to_string()
}

pub fn public_announcement(announcement: &Announcement, base: &Url) -> String {
    let link = module_link(base, &announcement.elective_code);

    format!(
        "🆕 <b>New review</b> \n\
        <b>{}</b>\n\
        <b>MC: {} </b>\n\
        ⭐ Rating: {}/5\n\
        🔗 Read the full review: <a href=\"{}\">Here</a>",
        encode_text(&announcement.elective_module),
        encode_text(&announcement.elective_code),
        announcement.ratings,
        encode_double_quoted_attribute(&link),
    )
}

pub fn approval_prompt(review: &Review) -> String {
    format!(
        "📝 <b>Review #{} awaiting approval</b>\n\n\
        <b>{}</b> ({})\n\
        📅 {} Semester {}\n\
        ⭐ Rating: {}/5\n\n\
        <b>Why this rating:</b> {}\n\
        <b>TL;DR:</b> {}\n\
        <b>Assignments:</b> {}\n\
        <b>Weightage:</b> {}\n\
        <b>Life hacks:</b> {}",
        review.id,
        encode_text(&review.elective_module),
        encode_text(&review.elective_code),
        encode_text(&review.academic_year),
        encode_text(&review.semester),
        review.ratings,
        encode_text(&review.rating_reason),
        encode_text(&review.tldr_experiences),
        encode_text(&review.assignment_review),
        encode_text(&review.assignment_weightage),
        encode_text(&review.life_hacks),
    )
}

pub fn approval_actions(review_id: i64) -> Vec<PromptAction> {
    vec![
        PromptAction::new("✅ Approve", ReviewAction::Approve.callback_data(review_id)),
        PromptAction::new("❌ Reject", ReviewAction::Reject.callback_data(review_id)),
    ]
}

pub fn approved_reply(review: &Review) -> String {
    format!(
        "✅ Review #{} for <b>{}</b> approved and published.",
        review.id,
        encode_text(&review.elective_code)
    )
}

pub fn rejected_reply(review_id: i64) -> String {
    format!("🗑 Review #{} rejected.", review_id)
}

pub fn not_found_reply(review_id: i64) -> String {
    format!("⚠️ Review #{} not found. It may have been moderated already.", review_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://sp-elective-site-frontend.vercel.app/modules").unwrap()
    }

    #[test]
    fn test_module_link_appends_code() {
        assert_eq!(
            module_link(&base(), "CS201"),
            "https://sp-elective-site-frontend.vercel.app/modules/CS201"
        );

        let trailing = Url::parse("https://example.com/modules/").unwrap();
        assert_eq!(module_link(&trailing, "CS201"), "https://example.com/modules/CS201");
    }

    #[test]
    fn test_module_link_encodes_code() {
        assert_eq!(
            module_link(&base(), "CS 201/x"),
            "https://sp-elective-site-frontend.vercel.app/modules/CS%20201%2Fx"
        );
    }

    #[test]
    fn test_public_announcement_template() {
        let announcement = Announcement {
            elective_module: "Data <Structures>".into(),
            elective_code: "CS201".into(),
            ratings: 4,
        };

        let text = public_announcement(&announcement, &base());

        assert!(text.starts_with("🆕 <b>New review</b>"));
        assert!(text.contains("<b>Data &lt;Structures&gt;</b>"));
        assert!(text.contains("<b>MC: CS201 </b>"));
        assert!(text.contains("⭐ Rating: 4/5"));
        assert!(text.contains(
            "<a href=\"https://sp-elective-site-frontend.vercel.app/modules/CS201\">Here</a>"
        ));
    }

    #[test]
    fn test_approval_actions_carry_review_id() {
        let actions = approval_actions(12);
        let ids: Vec<&str> = actions.iter().map(|a| a.action_id.as_str()).collect();
        assert_eq!(ids, vec!["approve|12", "reject|12"]);
    }
}
