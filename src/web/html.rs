//! Page rendering.
//!
//! The page is one self-contained HTML document; every user-supplied value
//! is escaped before it is echoed back.

use crate::forwarding::UpdateOutcome;

/// Everything the page template needs.
#[derive(Debug)]
pub struct PageView {
    pub include_map: bool,
    pub floors: Vec<String>,
    pub outcome: Option<UpdateOutcome>,
}

impl PageView {
    /// An empty form, before any submission.
    pub fn form(include_map: bool, floors: Vec<String>) -> Self {
        Self {
            include_map,
            floors,
            outcome: None,
        }
    }

    /// The form plus the result banner of a submission.
    pub fn outcome(include_map: bool, floors: Vec<String>, outcome: UpdateOutcome) -> Self {
        Self {
            include_map,
            floors,
            outcome: Some(outcome),
        }
    }
}

/// Minimal HTML escaping for text and attribute positions.
pub fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render the full page for `view`.
pub fn render_page(view: &PageView) -> String {
    let mut page = String::with_capacity(2048);
    page.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Call Forwarding</title>\n\
         <style>\n\
         body { font-family: sans-serif; max-width: 36rem; margin: 2rem auto; }\n\
         .banner { padding: 0.75rem 1rem; border-radius: 4px; margin-bottom: 1rem; }\n\
         .success { background: #e6f4ea; border: 1px solid #34a853; }\n\
         .error { background: #fce8e6; border: 1px solid #ea4335; }\n\
         label { display: block; margin-top: 0.75rem; }\n\
         </style>\n</head>\n<body>\n<h1>Call Forwarding</h1>\n",
    );

    match &view.outcome {
        Some(UpdateOutcome::Success {
            pattern,
            destination,
        }) => {
            page.push_str(&format!(
                "<div class=\"banner success\">Calls to {} now forward to {}.</div>\n",
                escape(pattern),
                escape(destination)
            ));
        }
        Some(UpdateOutcome::Failure { message, code }) => {
            page.push_str(&format!(
                "<div class=\"banner error\"><strong>Update failed.</strong> {}<br>\
                 <small>Error code: {}</small></div>\n",
                escape(message),
                escape(code)
            ));
        }
        None => {}
    }

    page.push_str(
        "<form method=\"post\" action=\"/\">\n\
         <label for=\"phone-num\">Phone number to change</label>\n\
         <input type=\"text\" id=\"phone-num\" name=\"phone-num\" required>\n",
    );

    if view.include_map {
        page.push_str(
            "<label for=\"forwarding-num-select\">Forward calls to</label>\n\
             <select id=\"forwarding-num-select\" name=\"forwarding-num-select\">\n",
        );
        for floor in &view.floors {
            let floor = escape(floor);
            page.push_str(&format!(
                "<option value=\"{}\">{}</option>\n",
                floor, floor
            ));
        }
        page.push_str("</select>\n");
    } else {
        page.push_str(
            "<label for=\"forwarding-num\">Forward calls to</label>\n\
             <input type=\"text\" id=\"forwarding-num\" name=\"forwarding-num\" required>\n",
        );
    }

    page.push_str(
        "<p><button type=\"submit\">Update forwarding</button></p>\n\
         </form>\n</body>\n</html>\n",
    );
    page
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"a&b"</b>"#),
            "&lt;b&gt;&quot;a&amp;b&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_success_page_echoes_values() {
        let view = PageView::outcome(
            false,
            Vec::new(),
            UpdateOutcome::Success {
                pattern: "1001".into(),
                destination: "5551234".into(),
            },
        );
        let page = render_page(&view);
        assert!(page.contains("1001"));
        assert!(page.contains("5551234"));
        assert!(page.contains("banner success"));
    }

    #[test]
    fn test_failure_page_shows_message_and_code() {
        let view = PageView::outcome(
            false,
            Vec::new(),
            UpdateOutcome::Failure {
                message: "There was an issue updating 1001".into(),
                code: "5007".into(),
            },
        );
        let page = render_page(&view);
        assert!(page.contains("There was an issue updating 1001"));
        assert!(page.contains("Error code: 5007"));
        assert!(page.contains("banner error"));
    }

    #[test]
    fn test_map_mode_renders_floor_dropdown() {
        let view = PageView::form(true, vec!["2nd-floor".into(), "3rd-floor".into()]);
        let page = render_page(&view);
        assert!(page.contains("forwarding-num-select"));
        assert!(page.contains("<option value=\"2nd-floor\">"));
        assert!(page.contains("<option value=\"3rd-floor\">"));
        assert!(!page.contains("name=\"forwarding-num\""));
    }

    #[test]
    fn test_direct_mode_renders_number_input() {
        let view = PageView::form(false, Vec::new());
        let page = render_page(&view);
        assert!(page.contains("name=\"forwarding-num\""));
        assert!(!page.contains("forwarding-num-select"));
    }

    #[test]
    fn test_user_input_is_escaped() {
        let view = PageView::outcome(
            false,
            Vec::new(),
            UpdateOutcome::Success {
                pattern: "<script>alert(1)</script>".into(),
                destination: "5551234".into(),
            },
        );
        let page = render_page(&view);
        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;"));
    }
}
