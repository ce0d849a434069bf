use super::contains_ignore_case;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "How do I add new birds to inventory?",
        answer: "Navigate to the Inventory page and click on 'Add Birds'. Fill in the bird type, quantity \
                 and coup assignment, then click 'Save' to update your inventory.",
    },
    Faq {
        question: "How can I track egg production?",
        answer: "Egg production is charted on the Dashboard. Narrow the chart to a coup or a date range with \
                 the filter bar above it.",
    },
    Faq {
        question: "How do I generate financial reports?",
        answer: "Go to the Financials page and click on 'Generate Report'. Select the report type, specify \
                 the date range and click 'Generate'.",
    },
    Faq {
        question: "Can I export data from the system?",
        answer: "Yes. Go to Settings > Advanced and click on 'Export Data', then choose the data type and \
                 format you prefer.",
    },
    Faq {
        question: "How do I add a new customer?",
        answer: "Navigate to the Customers page and click on 'Add Customer'. Fill in the name, contact \
                 information and any notes, then click 'Save'.",
    },
    Faq {
        question: "How can I set up alerts for low inventory?",
        answer: "Go to Admin > Farm Settings > Alert Configuration. Set threshold levels for feed stock, \
                 mortality and production. You will be notified when a threshold is crossed.",
    },
];

/// A guide card on the Documentation tab.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Guide {
    pub title: &'static str,
    pub summary: &'static str,
}

pub const GUIDES: &[Guide] = &[
    Guide {
        title: "Getting Started Guide",
        summary: "System navigation, setting up your farm profile and basic operations.",
    },
    Guide {
        title: "Inventory Management",
        summary: "Track birds, feed, medications and equipment in your inventory.",
    },
    Guide {
        title: "Financial Management",
        summary: "Record income and expenses and generate financial reports.",
    },
    Guide {
        title: "Customer Management",
        summary: "Keep customer records, purchase history and payments up to date.",
    },
];

pub const SUPPORT_EMAIL: &str = "support@poultryfarm.com";

/// FAQs whose question or answer contains `query`, ignoring case.
pub fn search_faqs(query: &str) -> Vec<&'static Faq> {
    let query = query.trim();
    FAQS.iter()
        .filter(|faq| contains_ignore_case(faq.question, query) || contains_ignore_case(faq.answer, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_returns_every_faq() {
        assert_eq!(search_faqs("").len(), FAQS.len());
        assert_eq!(search_faqs("   ").len(), FAQS.len());
    }

    #[test]
    fn searches_questions_and_answers() {
        let hits = search_faqs("CUSTOMER");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].question, "How do I add a new customer?");

        assert_eq!(search_faqs("threshold").len(), 1);
        assert!(search_faqs("blockchain").is_empty());
    }
}
