//! Report content model.
//!
//! The fixed 2024-2025 Saf-gard email program report: five sections of typed
//! content blocks carrying literal copy and numbers. Nothing in this module
//! is computed at runtime; the viewer renders exactly these values.

use chrono::NaiveDate;

use crate::navigator::Section;

/// The navigable sections, in document order. This list is the navigation
/// configuration; `REPORT` below carries the matching content.
pub const SECTIONS: &[Section] = &[
    Section { id: "overview", label: "Overview" },
    Section { id: "results", label: "Results" },
    Section { id: "performance-factors", label: "Performance Factors" },
    Section { id: "case-study", label: "Case Study" },
    Section { id: "next-steps", label: "Next Steps" },
];

/// Report header data shown in the title banner.
#[derive(Debug, Clone, Copy)]
pub struct ReportMeta {
    pub title: &'static str,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub sample_note: &'static str,
}

impl ReportMeta {
    /// "January 2024 – July 2025" for the banner subtitle.
    pub fn period_display(&self) -> String {
        format!(
            "{} – {}",
            self.period_start.format("%B %Y"),
            self.period_end.format("%B %Y")
        )
    }
}

pub fn meta() -> ReportMeta {
    ReportMeta {
        title: "2024-2025 Saf-gard Email Metrics Analysis",
        period_start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
        period_end: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap_or_default(),
        sample_note: "~140 emails · promotional, subsidy, catalogs",
    }
}

/// Accent applied to bullets, exhibits and notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Brand orange; the default bullet and exhibit accent.
    Normal,
    /// Dimmed; the weaker subject-line examples.
    Muted,
    /// Straw yellow; the urgency/relevance guideline.
    Attention,
    /// Slate blue; case-study exhibit frames.
    Info,
}

/// Performance class used by the spread chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Excellent,
    Average,
    Poor,
}

/// One bullet entry; `lead` renders bold ahead of the text and may be empty.
#[derive(Debug, Clone, Copy)]
pub struct ListItem {
    pub lead: &'static str,
    pub text: &'static str,
    pub tone: Tone,
}

/// One headline stat card.
#[derive(Debug, Clone, Copy)]
pub struct StatCard {
    pub value: &'static str,
    pub name: &'static str,
    pub note: &'static str,
}

/// One row of the industry benchmark table.
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkRow {
    pub metric: &'static str,
    pub ours: &'static str,
    pub industry: &'static str,
    pub rating: &'static str,
    pub good: bool,
}

/// One bar of the performance spread chart.
#[derive(Debug, Clone, Copy)]
pub struct SpreadSegment {
    pub label: &'static str,
    pub count: u16,
    pub share: &'static str,
    pub criteria: &'static str,
    pub rating: Rating,
}

/// The campaign performance spread: counts per class plus the axis label.
#[derive(Debug, Clone, Copy)]
pub struct Spread {
    pub segments: &'static [SpreadSegment],
    pub total: u16,
    pub axis_label: &'static str,
}

/// A quoted sample with a short evaluation note.
#[derive(Debug, Clone, Copy)]
pub struct Exhibit {
    pub quote: &'static str,
    pub note: &'static str,
}

/// One paragraph-level unit of report content, in document order.
#[derive(Debug, Clone, Copy)]
pub enum Block {
    /// Subsection heading inside a section.
    Subheading(&'static str),
    /// Flowing paragraph, wrapped at the content width.
    Paragraph(&'static str),
    /// Bordered callout with a title; findings, insights, conclusions.
    Callout {
        title: &'static str,
        body: &'static [&'static str],
    },
    /// Bullet list, optionally titled.
    Bullets {
        title: Option<&'static str>,
        items: &'static [ListItem],
    },
    /// Wall of small labelled tiles (the metrics-analyzed inventory).
    TileGrid(&'static [&'static str]),
    /// Headline stat cards.
    StatCards(&'static [StatCard]),
    /// The benchmark comparison table.
    BenchmarkTable {
        headers: [&'static str; 4],
        rows: &'static [BenchmarkRow],
    },
    /// The performance spread bar chart.
    SpreadChart(Spread),
    /// Group of quoted samples sharing a title and accent.
    Exhibits {
        title: &'static str,
        tone: Tone,
        items: &'static [Exhibit],
    },
    /// Framed stand-in for an email screenshot, with its annotation.
    Figure {
        anchor: &'static str,
        caption: &'static str,
        annotation: &'static str,
    },
    /// Filled results banner in the case study.
    Banner {
        title: &'static str,
        stats: &'static [StatCard],
    },
    /// External reference rendered as a labelled link line.
    Reference {
        label: &'static str,
        url: &'static str,
    },
}

/// A section's content: its navigation entry, the on-page heading (which may
/// be longer than the panel label), and the block sequence.
#[derive(Debug, Clone, Copy)]
pub struct SectionContent {
    pub section: Section,
    pub heading: &'static str,
    pub blocks: &'static [Block],
}

/// The whole report, one entry per navigable section.
pub static REPORT: &[SectionContent] = &[
    SectionContent {
        section: SECTIONS[0],
        heading: "Overview",
        blocks: &[
            Block::Callout {
                title: "Data Used",
                body: &[
                    "~140 individual emails from Jan 2024 to July 2025 were gathered and \
                     used as the sample size for the analysis. These included Promotional \
                     Emails, Subsidy, and Catalogs for both standalone campaigns and \
                     recurring drips.",
                ],
            },
            Block::Subheading("Key Metrics Analyzed"),
            Block::TileGrid(&[
                "Open Rate",
                "Click-Through Rate (CTR)",
                "Delivery Rate",
                "Opt-Out Rate",
                "Targeting",
                "List Size",
                "Send Time/Date",
                "Segmentation",
                "Subject Line",
                "Preheader",
                "From Name",
                "Primary Headline",
                "Copy Content",
                "Value Proposition",
                "Call-to-Action (CTA)",
                "Urgency Elements",
                "Convenience Options",
            ]),
        ],
    },
    SectionContent {
        section: SECTIONS[1],
        heading: "Results",
        blocks: &[
            Block::StatCards(&[
                StatCard { value: "96.77%", name: "Delivery Rate", note: "Excellent inbox placement" },
                StatCard { value: "26.17%", name: "Open Rate", note: "Strong engagement" },
                StatCard { value: "5.96%", name: "Click-Through Rate", note: "Solid performance" },
                StatCard { value: "25%", name: "Click-to-Open Rate", note: "Good engagement" },
                StatCard { value: "4.72%", name: "Opt-Out Rate", note: "Needs improvement" },
                StatCard { value: "0.032%", name: "Spam Complaint Rate", note: "Excellent performance" },
            ]),
            Block::Subheading("Industry Benchmarks"),
            Block::BenchmarkTable {
                headers: ["Metric", "SafGard", "Industry Average", "Performance"],
                rows: &[
                    BenchmarkRow { metric: "Delivery Rate", ours: "96.77%", industry: "90.0% - 96.5%", rating: "Above Average", good: true },
                    BenchmarkRow { metric: "Open Rate", ours: "26.17%", industry: "18.0% - 21.0%", rating: "Excellent", good: true },
                    BenchmarkRow { metric: "Click-Through Rate", ours: "5.96%", industry: "1.0% - 3.0%", rating: "Excellent", good: true },
                    BenchmarkRow { metric: "Click-to-Open Rate", ours: "25%", industry: "8.0% - 11.0%", rating: "Excellent", good: true },
                    BenchmarkRow { metric: "Opt-Out Rate", ours: "4.72%", industry: "0.1% - 0.3%", rating: "Needs Improvement", good: false },
                    BenchmarkRow { metric: "Spam Complaint Rate", ours: "0.032%", industry: "0.05% - 0.08%", rating: "Excellent", good: true },
                ],
            },
            Block::Subheading("Performance Spread"),
            Block::Paragraph(
                "We see that the overall positive metrics are the result of a smaller set \
                 of emails that perform extremely well and many emails which perform \
                 adequately or below.",
            ),
            Block::SpreadChart(Spread {
                segments: &[
                    SpreadSegment {
                        label: "Excellent",
                        count: 36,
                        share: "25.7%",
                        criteria: "Open Rate > 23.49% AND CTR > 3.39%",
                        rating: Rating::Excellent,
                    },
                    SpreadSegment {
                        label: "Average",
                        count: 54,
                        share: "38.6%",
                        criteria: "Mid-range performance across metrics",
                        rating: Rating::Average,
                    },
                    SpreadSegment {
                        label: "Poor",
                        count: 50,
                        share: "35.7%",
                        criteria: "Open Rate < 10.73% AND CTR < 0.34%",
                        rating: Rating::Poor,
                    },
                ],
                total: 140,
                axis_label: "Number of Campaigns (Total: 140)",
            }),
            Block::Callout {
                title: "Key Insight",
                body: &[
                    "By studying the different performance types and measuring them against \
                     the data points, we can get a picture of what factors affect which \
                     metrics.",
                ],
            },
        ],
    },
    SectionContent {
        section: SECTIONS[2],
        heading: "Performance Factor Analysis",
        blocks: &[
            Block::Subheading("Delivery Rate (96.77%)"),
            Block::Paragraph("The percentage of emails that successfully reach recipients' inboxes."),
            Block::Bullets {
                title: Some("What Affects It:"),
                items: &[
                    ListItem { lead: "List Quality:", text: "Valid email addresses without typos.", tone: Tone::Normal },
                    ListItem {
                        lead: "Spam Trigger Words:",
                        text: "Using words like \"FREE!\", \"URGENT!\", and excessive caps can trigger spam filters.",
                        tone: Tone::Normal,
                    },
                    ListItem { lead: "Image-to-Text Ratio:", text: "Too many images can trigger spam filters.", tone: Tone::Normal },
                ],
            },
            Block::Callout {
                title: "Findings",
                body: &["Delivery rate is excellent and needs no major changes"],
            },
            Block::Subheading("Open Rate (26.17%)"),
            Block::Paragraph("The percentage of delivered emails that recipients open."),
            Block::Bullets {
                title: Some("What Affects It:"),
                items: &[
                    ListItem {
                        lead: "Subject Line:",
                        text: "The number one factor affecting OR. SLs that follow key points usually outperform those that don't.",
                        tone: Tone::Normal,
                    },
                    ListItem {
                        lead: "Preheader:",
                        text: "Secondary factor, much less important than SL. Should be used to compliment SL and continue to drive the point further.",
                        tone: Tone::Normal,
                    },
                    ListItem {
                        lead: "Sender Name:",
                        text: "Limited data, majority are division names with very few distinct examples.",
                        tone: Tone::Normal,
                    },
                    ListItem { lead: "Send Time:", text: "7-9 AM, Tuesday - Thursday", tone: Tone::Normal },
                ],
            },
            Block::Callout {
                title: "Findings",
                body: &[
                    "SG users respond best to clear, specific benefits or announcements that \
                     relate to their needs. They are also more likely to open emails with \
                     personalized content from sources they recognize.",
                    "Suggestion: Test afternoon or evening send times to catch workers after \
                     their shifts/when relaxing doing clerical work to wrap up the day.",
                ],
            },
            Block::Subheading("Subject Line Building Guidelines"),
            Block::Paragraph("Includes at least 1 of the following. Sweet spot is using 2 at a time."),
            Block::Bullets {
                title: None,
                items: &[
                    ListItem {
                        lead: "User specific language",
                        text: "(Location, Industry, Role, Name, Company Name)",
                        tone: Tone::Normal,
                    },
                    ListItem {
                        lead: "Direct user benefit",
                        text: "(dollar amount, feature, problem solution, convenience)",
                        tone: Tone::Normal,
                    },
                    ListItem {
                        lead: "Focused branding",
                        text: "(Brand name + direct benefit relationship)",
                        tone: Tone::Normal,
                    },
                    ListItem {
                        lead: "Urgency/Relevance",
                        text: "(Limited time, curiosity builder, user relevance to message - why should they care?)",
                        tone: Tone::Attention,
                    },
                ],
            },
            Block::Exhibits {
                title: "Good Examples",
                tone: Tone::Normal,
                items: &[
                    Exhibit { quote: "BRUNT. Our newest brand partner has arrived.", note: "(23% OR)" },
                    Exhibit { quote: "Savannah: There's a new way to get your safety shoes.", note: "(36% OR)" },
                ],
            },
            Block::Exhibits {
                title: "Less Good Examples",
                tone: Tone::Muted,
                items: &[
                    Exhibit { quote: "Timberland PRO® just got even better.", note: "(17% OR)" },
                    Exhibit { quote: "Summer work shoe shopping has begun.", note: "(9% OR)" },
                ],
            },
            Block::Subheading("Click-Through Rate (CTR)/ Click-to-Open Rate (CToR)"),
            Block::Bullets {
                title: Some("What It Means:"),
                items: &[
                    ListItem {
                        lead: "CTR:",
                        text: "The percentage of delivered emails where recipients clicked on links.",
                        tone: Tone::Normal,
                    },
                    ListItem {
                        lead: "CToR:",
                        text: "Of people who opened the email, what percentage clicked on something",
                        tone: Tone::Normal,
                    },
                ],
            },
            Block::Bullets {
                title: Some("Email Content"),
                items: &[
                    ListItem { lead: "Expectation Match:", text: "Content delivers on subject line/preheader promise.", tone: Tone::Normal },
                    ListItem { lead: "Urgency:", text: "Time-sensitive offers or deadlines, upcoming events.", tone: Tone::Normal },
                    ListItem {
                        lead: "Value Proposition:",
                        text: "Clear benefit for clicking. Problem user has and solution we are offering.",
                        tone: Tone::Normal,
                    },
                    ListItem { lead: "Compelling Copy:", text: "Persuasive, benefit-focused writing.", tone: Tone::Normal },
                    ListItem { lead: "Trust Elements:", text: "Testimonials, certifications, guarantees.", tone: Tone::Normal },
                ],
            },
            Block::Bullets {
                title: Some("Call-to-Action (CTA)"),
                items: &[
                    ListItem {
                        lead: "Buttons:",
                        text: "The text should be clear, action-oriented (\"Shop Now\", \"Get Started\"). They should be prominent and easy to spot at a glance, with multiple locations for easy/immediate action.",
                        tone: Tone::Normal,
                    },
                    ListItem {
                        lead: "Multiple Options:",
                        text: "Different ways to engage (phone, email, website link).",
                        tone: Tone::Normal,
                    },
                    ListItem {
                        lead: "Clarity:",
                        text: "Obvious what happens when clicked and what actions will be needed from the user.",
                        tone: Tone::Normal,
                    },
                ],
            },
            Block::Bullets {
                title: Some("Targeting"),
                items: &[
                    ListItem {
                        lead: "Audience Relevance:",
                        text: "Knowing the audience and relating the message to them.",
                        tone: Tone::Normal,
                    },
                    ListItem {
                        lead: "List Size:",
                        text: "Ideal range is between 2000-5000 contacts. Up to 15,000.",
                        tone: Tone::Normal,
                    },
                    ListItem {
                        lead: "Segmentation:",
                        text: "Tailored content for specific groups broken into lists.",
                        tone: Tone::Normal,
                    },
                ],
            },
            Block::Bullets {
                title: Some("Design"),
                items: &[
                    ListItem {
                        lead: "Spacing:",
                        text: "Makes good use of the top half of the email to hook users.",
                        tone: Tone::Normal,
                    },
                    ListItem {
                        lead: "Visual Hierarchy:",
                        text: "Easy to scan and read. (67% of SG users fully read emails as opposed to skimming.)",
                        tone: Tone::Normal,
                    },
                    ListItem {
                        lead: "Mobile Optimization:",
                        text: "Works on all devices. ~50% of users prefer mobile.",
                        tone: Tone::Normal,
                    },
                ],
            },
            Block::Callout {
                title: "Findings",
                body: &[
                    "There are several factors that affect interaction within an email. Copy \
                     designed to appeal to the user's needs, focuses on benefits and provides \
                     direct and easy to understand communication normally results in greater \
                     interactions.",
                ],
            },
            Block::Subheading("Opt-Out Rate (0.21%)"),
            Block::Paragraph("The percentage of recipients who unsubscribe after receiving an email."),
            Block::Bullets {
                title: Some("What Affects It:"),
                items: &[
                    ListItem { lead: "Content Relevance:", text: "Emails that don't match subscriber interests", tone: Tone::Normal },
                    ListItem { lead: "Frequency:", text: "Too many emails can lead to fatigue", tone: Tone::Normal },
                    ListItem {
                        lead: "Expectation Mismatch:",
                        text: "Content differs from what was promised at signup",
                        tone: Tone::Normal,
                    },
                ],
            },
        ],
    },
    SectionContent {
        section: SECTIONS[3],
        heading: "Case Study: Gulfstream Subsidy Email",
        blocks: &[
            Block::Paragraph(
                "Let's look at an example of an email built to closely follow a \
                 \"successful\" template, based on our findings so far.",
            ),
            Block::Paragraph(
                "First, the list is segmented. Broken up by location with size below 5000 \
                 contacts per list. There were 12 email versions in total for Gulfstream, \
                 and they all performed well.",
            ),
            Block::Exhibits {
                title: "Subject Line",
                tone: Tone::Info,
                items: &[Exhibit {
                    quote: "Savannah: There's a new way to get your safety shoes.",
                    note: "(Super simple, location name, direct benefit)",
                }],
            },
            Block::Figure {
                anchor: "email-section-1",
                caption: "Gulfstream Email · Section 1",
                annotation: "Immediately addresses key selling point and reinforces SL. A new \
                     way to get shoes was the reason they opened and here is the info they \
                     need. It provides context, value prop and credibility to the brand \
                     within the eyeline. Finally, that clear indicator of benefit with the \
                     money sign to grab attention. Basically forces you to scroll down.",
            },
            Block::Figure {
                anchor: "email-section-2",
                caption: "Gulfstream Email · Section 2",
                annotation: "Second section continues to support the original topic and \
                     message through answering common questions the user might have and \
                     providing clear and direct answers and communication. How much money do \
                     I get? How often and when? How can I use it? - A great example of \
                     providing multiple avenues for the user.",
            },
            Block::Figure {
                anchor: "email-section-3",
                caption: "Gulfstream Email · Section 3",
                annotation: "Finally, we offer additional resources and contacts at the \
                     bottom. Note there is no CTA at the bottom of the page. They have been \
                     focused towards the top and the corresponding actions needed.",
            },
            Block::Banner {
                title: "The Results",
                stats: &[
                    StatCard { value: "36.3%", name: "Open Rate", note: "" },
                    StatCard { value: "46.2%", name: "Click Through Rate", note: "" },
                ],
            },
            Block::Callout {
                title: "Conclusion",
                body: &[
                    "While this singular email is an outlier in performance, it shows the \
                     improvements that can be made to smooth out the performance curve \
                     further towards the positive.",
                ],
            },
        ],
    },
    SectionContent {
        section: SECTIONS[4],
        heading: "Next Steps",
        blocks: &[
            Block::Subheading("Short Term"),
            Block::Bullets {
                title: None,
                items: &[
                    ListItem {
                        lead: "",
                        text: "Work closely with copy and design to implement the key factors the data is supporting and testing the results.",
                        tone: Tone::Normal,
                    },
                    ListItem {
                        lead: "",
                        text: "Improve audience segmentation habits during campaign building/brief.",
                        tone: Tone::Normal,
                    },
                    ListItem { lead: "", text: "Implement A/B testing and list separation.", tone: Tone::Normal },
                ],
            },
            Block::Reference {
                label: "Copy Assistant",
                url: "https://notebooklm.google.com/notebook/0a570834-4629-49be-bbb0-c7f3a4dfea76",
            },
            Block::Subheading("Long Term"),
            Block::Bullets {
                title: Some("Dynamic Content Generation"),
                items: &[
                    ListItem { lead: "", text: "Automated image insertion from Salesforce", tone: Tone::Normal },
                    ListItem { lead: "", text: "Template-based multi-brand email creation", tone: Tone::Normal },
                ],
            },
            Block::Bullets {
                title: Some("Consistent Content Strategy"),
                items: &[
                    ListItem { lead: "", text: "SG drip campaign revamp", tone: Tone::Normal },
                    ListItem { lead: "", text: "Regular new contact nurture emails", tone: Tone::Normal },
                ],
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_sections_match_navigation_config() {
        assert_eq!(REPORT.len(), SECTIONS.len());
        for (content, section) in REPORT.iter().zip(SECTIONS) {
            assert_eq!(content.section.id, section.id);
            assert_eq!(content.section.label, section.label);
        }
    }

    #[test]
    fn section_ids_are_unique() {
        for (i, a) in SECTIONS.iter().enumerate() {
            for b in &SECTIONS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn headline_stats_carry_the_published_values() {
        let cards = REPORT[1]
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::StatCards(cards) => Some(*cards),
                _ => None,
            })
            .unwrap();
        assert_eq!(cards.len(), 6);
        assert_eq!(cards[0].value, "96.77%");
        assert_eq!(cards[1].value, "26.17%");
        assert_eq!(cards[5].name, "Spam Complaint Rate");
    }

    #[test]
    fn spread_segments_sum_to_the_sample_total() {
        let spread = REPORT[1]
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::SpreadChart(spread) => Some(*spread),
                _ => None,
            })
            .unwrap();
        let sum: u16 = spread.segments.iter().map(|s| s.count).sum();
        assert_eq!(sum, spread.total);
        assert_eq!(spread.total, 140);
    }

    #[test]
    fn overview_lists_all_analyzed_metrics() {
        let tiles = REPORT[0]
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::TileGrid(tiles) => Some(*tiles),
                _ => None,
            })
            .unwrap();
        assert_eq!(tiles.len(), 17);
    }

    #[test]
    fn benchmark_table_flags_the_one_weak_metric() {
        let rows = REPORT[1]
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::BenchmarkTable { rows, .. } => Some(*rows),
                _ => None,
            })
            .unwrap();
        assert_eq!(rows.len(), 6);
        let weak: Vec<_> = rows.iter().filter(|r| !r.good).collect();
        assert_eq!(weak.len(), 1);
        assert_eq!(weak[0].metric, "Opt-Out Rate");
    }

    #[test]
    fn case_study_figures_carry_their_anchors() {
        let anchors: Vec<_> = REPORT[3]
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::Figure { anchor, .. } => Some(*anchor),
                _ => None,
            })
            .collect();
        assert_eq!(anchors, vec!["email-section-1", "email-section-2", "email-section-3"]);
    }

    #[test]
    fn period_renders_as_month_and_year() {
        assert_eq!(meta().period_display(), "January 2024 – July 2025");
    }
}
