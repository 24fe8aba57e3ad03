use serde::Serialize;
use std::fmt;

use crate::models::presentation::Presentation;
use crate::models::slide::Slide;
use crate::models::theme::ThemeId;

/// Grouping used by the template picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Medical,
    Business,
    Education,
    General,
}

impl TemplateCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateCategory::Medical => "medical",
            TemplateCategory::Business => "business",
            TemplateCategory::Education => "education",
            TemplateCategory::General => "general",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        TEMPLATE_CATEGORIES
            .iter()
            .map(|info| info.id)
            .find(|category| category.as_str() == s)
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display metadata for a category tab.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryInfo {
    pub id: TemplateCategory,
    pub name: &'static str,
    pub icon: &'static str,
}

pub static TEMPLATE_CATEGORIES: [CategoryInfo; 4] = [
    CategoryInfo {
        id: TemplateCategory::Medical,
        name: "Medical",
        icon: "FirstAid",
    },
    CategoryInfo {
        id: TemplateCategory::Business,
        name: "Business",
        icon: "Briefcase",
    },
    CategoryInfo {
        id: TemplateCategory::Education,
        name: "Education",
        icon: "GraduationCap",
    },
    CategoryInfo {
        id: TemplateCategory::General,
        name: "General",
        icon: "Files",
    },
];

/// A starter slide; gets an id only when the template is instantiated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemplateSlide {
    pub title: &'static str,
    pub content: &'static str,
}

/// A starter deck.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PresentationTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: TemplateCategory,
    /// Symbolic icon name, resolved by the view layer.
    pub icon: &'static str,
    pub theme: ThemeId,
    pub slides: &'static [TemplateSlide],
}

impl PresentationTemplate {
    /// Builds a new presentation from this template. Every slide gets a fresh id.
    pub fn instantiate(&self, title: &str) -> Presentation {
        let slides = self
            .slides
            .iter()
            .map(|s| Slide::new(s.title, s.content))
            .collect();
        Presentation::new_with_slides(title, slides, self.theme)
    }
}

/// Templates in `category`, in catalog order.
pub fn templates_by_category(
    category: TemplateCategory,
) -> impl Iterator<Item = &'static PresentationTemplate> {
    TEMPLATES.iter().filter(move |t| t.category == category)
}

pub fn template_by_id(id: &str) -> Option<&'static PresentationTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

pub static TEMPLATES: [PresentationTemplate; 9] = [
    PresentationTemplate {
        id: "medical-report",
        name: "Medical Report",
        description: "Patient case presentation with diagnosis and treatment plan",
        category: TemplateCategory::Medical,
        icon: "FirstAid",
        theme: ThemeId::MedicalGreen,
        slides: &[
            TemplateSlide {
                title: "Patient Case Presentation",
                content: "Case #: [Enter Case Number]\nDate: [Enter Date]\nPresented by: [Your Name]",
            },
            TemplateSlide {
                title: "Patient Information",
                content: "Age: [Enter Age]\nGender: [Enter Gender]\nMedical Record #: [Enter MRN]\nChief Complaint: [Enter primary concern]",
            },
            TemplateSlide {
                title: "History of Present Illness",
                content: "Onset: [When symptoms began]\nDuration: [How long]\nSymptoms: [List main symptoms]\nProgression: [How symptoms have changed]",
            },
            TemplateSlide {
                title: "Physical Examination",
                content: "Vital Signs:\n- BP: [Enter]\n- HR: [Enter]\n- Temp: [Enter]\n- RR: [Enter]\n\nGeneral: [Observations]\nSystemic Findings: [Key findings]",
            },
            TemplateSlide {
                title: "Diagnostic Findings",
                content: "Laboratory Results:\n[List relevant lab values]\n\nImaging Studies:\n[Describe X-ray, CT, MRI findings]\n\nOther Tests:\n[Additional diagnostic results]",
            },
            TemplateSlide {
                title: "Diagnosis",
                content: "Primary Diagnosis:\n[Enter diagnosis]\n\nDifferential Diagnoses:\n1. [Alternative diagnosis 1]\n2. [Alternative diagnosis 2]\n3. [Alternative diagnosis 3]",
            },
            TemplateSlide {
                title: "Treatment Plan",
                content: "Immediate Management:\n[Acute interventions]\n\nMedications:\n[List prescriptions with dosages]\n\nProcedures:\n[Any planned procedures]",
            },
            TemplateSlide {
                title: "Follow-up & Prognosis",
                content: "Follow-up Schedule:\n[Timeline for next visits]\n\nExpected Outcomes:\n[Prognosis and recovery timeline]\n\nPatient Education:\n[Key points discussed with patient]",
            },
        ],
    },
    PresentationTemplate {
        id: "clinical-rounds",
        name: "Clinical Rounds",
        description: "Morning rounds presentation format for healthcare teams",
        category: TemplateCategory::Medical,
        icon: "Heartbeat",
        theme: ThemeId::MedicalGreen,
        slides: &[
            TemplateSlide {
                title: "Morning Rounds",
                content: "Department: [Department Name]\nDate: [Today's Date]\nAttending: [Attending Physician]",
            },
            TemplateSlide {
                title: "Patient Overview",
                content: "Name: [Patient Name/ID]\nAge/Gender: [Demographics]\nAdmission Date: [Date]\nDiagnosis: [Primary diagnosis]\nHospital Day: [Day #]",
            },
            TemplateSlide {
                title: "Overnight Events",
                content: "Significant Events:\n[Any overnight incidents]\n\nVital Signs Trends:\n[Notable changes]\n\nInterventions:\n[Actions taken overnight]",
            },
            TemplateSlide {
                title: "Current Status",
                content: "Subjective: [Patient's reported condition]\n\nObjective:\n- Vitals: [Latest readings]\n- Exam: [Physical findings]\n\nLabs: [Recent results]",
            },
            TemplateSlide {
                title: "Assessment & Plan",
                content: "Assessment:\n[Current evaluation]\n\nPlan for Today:\n1. [Action item 1]\n2. [Action item 2]\n3. [Action item 3]\n\nDischarge Planning: [Target date and criteria]",
            },
        ],
    },
    PresentationTemplate {
        id: "business-pitch",
        name: "Business Pitch",
        description: "Investor pitch deck for startups and new ventures",
        category: TemplateCategory::Business,
        icon: "ChartLineUp",
        theme: ThemeId::CorporateGray,
        slides: &[
            TemplateSlide {
                title: "[Your Company Name]",
                content: "[Tagline or value proposition]\n\nPresented by: [Your Name]\n[Your Title]",
            },
            TemplateSlide {
                title: "The Problem",
                content: "[Describe the problem you're solving]\n\n• Pain point 1\n• Pain point 2\n• Pain point 3\n\nMarket Size: [TAM/SAM/SOM figures]",
            },
            TemplateSlide {
                title: "The Solution",
                content: "[Your product or service]\n\nKey Features:\n• Feature 1: [Benefit]\n• Feature 2: [Benefit]\n• Feature 3: [Benefit]\n\nUnique Value: [What makes you different]",
            },
            TemplateSlide {
                title: "Market Opportunity",
                content: "Total Addressable Market: [Amount]\nServiceable Market: [Amount]\nTarget Market: [Amount]\n\nGrowth Rate: [Percentage]\nMarket Trends: [Key trends supporting growth]",
            },
            TemplateSlide {
                title: "Business Model",
                content: "Revenue Streams:\n• [Stream 1]\n• [Stream 2]\n• [Stream 3]\n\nPricing: [Pricing strategy]\nUnit Economics: [Key metrics]",
            },
            TemplateSlide {
                title: "Traction",
                content: "Key Metrics:\n• Revenue: [Amount]\n• Customers: [Number]\n• Growth Rate: [Percentage]\n\nMilestones:\n✓ [Achievement 1]\n✓ [Achievement 2]\n✓ [Achievement 3]",
            },
            TemplateSlide {
                title: "Competition",
                content: "Competitive Landscape:\n[Overview of competitors]\n\nOur Advantage:\n• [Differentiator 1]\n• [Differentiator 2]\n• [Differentiator 3]",
            },
            TemplateSlide {
                title: "Go-to-Market Strategy",
                content: "Customer Acquisition:\n[How you'll reach customers]\n\nChannels:\n• [Channel 1]\n• [Channel 2]\n• [Channel 3]\n\nPartnerships: [Key partnerships]",
            },
            TemplateSlide {
                title: "Financial Projections",
                content: "Year 1: [Revenue projection]\nYear 2: [Revenue projection]\nYear 3: [Revenue projection]\n\nBreak-even: [Timeline]\nKey Assumptions: [List main assumptions]",
            },
            TemplateSlide {
                title: "The Team",
                content: "[Founder/CEO Name] - [Background]\n[Co-founder/CTO Name] - [Background]\n[Key Team Member] - [Background]\n\nAdvisors:\n• [Advisor 1]\n• [Advisor 2]",
            },
            TemplateSlide {
                title: "The Ask",
                content: "Raising: [Amount]\n\nUse of Funds:\n• [Category 1]: [Percentage]\n• [Category 2]: [Percentage]\n• [Category 3]: [Percentage]\n\nMilestones: [What this funding will achieve]",
            },
        ],
    },
    PresentationTemplate {
        id: "quarterly-review",
        name: "Quarterly Business Review",
        description: "Company performance review and strategic update",
        category: TemplateCategory::Business,
        icon: "PresentationChart",
        theme: ThemeId::ProfessionalBlue,
        slides: &[
            TemplateSlide {
                title: "Q[X] [Year] Business Review",
                content: "[Company Name]\n[Department/Division]\n\nPresented by: [Your Name]\n[Date]",
            },
            TemplateSlide {
                title: "Executive Summary",
                content: "Key Highlights:\n• [Major achievement 1]\n• [Major achievement 2]\n• [Major achievement 3]\n\nOverall Performance: [Brief summary]",
            },
            TemplateSlide {
                title: "Financial Performance",
                content: "Revenue: [Amount] ([vs target/previous quarter])\nProfit: [Amount] ([vs target/previous quarter])\nExpenses: [Amount] ([vs budget])\n\nKey Drivers:\n• [Driver 1]\n• [Driver 2]",
            },
            TemplateSlide {
                title: "Key Metrics",
                content: "Metric 1: [Value] ([% change])\nMetric 2: [Value] ([% change])\nMetric 3: [Value] ([% change])\nMetric 4: [Value] ([% change])\n\nTrend Analysis: [Observations]",
            },
            TemplateSlide {
                title: "Strategic Initiatives",
                content: "Initiative 1: [Name]\nStatus: [On track/Delayed/Complete]\nImpact: [Results or expected outcomes]\n\nInitiative 2: [Name]\nStatus: [On track/Delayed/Complete]\nImpact: [Results or expected outcomes]",
            },
            TemplateSlide {
                title: "Challenges & Risks",
                content: "Current Challenges:\n• [Challenge 1]\n• [Challenge 2]\n• [Challenge 3]\n\nMitigation Plans:\n[How we're addressing these challenges]",
            },
            TemplateSlide {
                title: "Next Quarter Priorities",
                content: "Q[X+1] Focus Areas:\n1. [Priority 1]\n2. [Priority 2]\n3. [Priority 3]\n\nTargets:\n• [Target 1]\n• [Target 2]\n• [Target 3]",
            },
            TemplateSlide {
                title: "Questions & Discussion",
                content: "[Open for team discussion and Q&A]",
            },
        ],
    },
    PresentationTemplate {
        id: "project-proposal",
        name: "Project Proposal",
        description: "Project planning and approval presentation",
        category: TemplateCategory::Business,
        icon: "FolderOpen",
        theme: ThemeId::CorporateGray,
        slides: &[
            TemplateSlide {
                title: "Project Proposal",
                content: "[Project Name]\n\nProposed by: [Your Name]\nDepartment: [Department]\nDate: [Date]",
            },
            TemplateSlide {
                title: "Project Overview",
                content: "Objective:\n[What this project aims to achieve]\n\nScope:\n[What is included and excluded]\n\nExpected Duration: [Timeline]",
            },
            TemplateSlide {
                title: "Business Case",
                content: "Problem Statement:\n[Issue being addressed]\n\nExpected Benefits:\n• [Benefit 1]\n• [Benefit 2]\n• [Benefit 3]\n\nROI: [Expected return on investment]",
            },
            TemplateSlide {
                title: "Project Approach",
                content: "Methodology: [Approach being used]\n\nKey Phases:\n1. [Phase 1] - [Timeline]\n2. [Phase 2] - [Timeline]\n3. [Phase 3] - [Timeline]",
            },
            TemplateSlide {
                title: "Resources Required",
                content: "Team Members:\n• [Role 1] - [FTE/Hours]\n• [Role 2] - [FTE/Hours]\n\nBudget: [Total amount]\n\nTools/Equipment:\n[List required resources]",
            },
            TemplateSlide {
                title: "Timeline & Milestones",
                content: "Start Date: [Date]\nEnd Date: [Date]\n\nKey Milestones:\n• [Milestone 1] - [Date]\n• [Milestone 2] - [Date]\n• [Milestone 3] - [Date]",
            },
            TemplateSlide {
                title: "Risks & Dependencies",
                content: "Risks:\n• [Risk 1] - [Mitigation]\n• [Risk 2] - [Mitigation]\n\nDependencies:\n• [Dependency 1]\n• [Dependency 2]",
            },
            TemplateSlide {
                title: "Next Steps & Approval",
                content: "Immediate Actions:\n1. [Action 1]\n2. [Action 2]\n3. [Action 3]\n\nRequesting Approval To:\n[What you need approval for]",
            },
        ],
    },
    PresentationTemplate {
        id: "research-findings",
        name: "Research Findings",
        description: "Academic or clinical research presentation",
        category: TemplateCategory::Medical,
        icon: "MagnifyingGlass",
        theme: ThemeId::ProfessionalBlue,
        slides: &[
            TemplateSlide {
                title: "Research Presentation",
                content: "[Research Title]\n\nPrincipal Investigator: [Name]\nInstitution: [Institution Name]\nDate: [Date]",
            },
            TemplateSlide {
                title: "Background & Rationale",
                content: "Current State of Knowledge:\n[What is already known]\n\nKnowledge Gap:\n[What is not known]\n\nWhy This Matters:\n[Significance of the research]",
            },
            TemplateSlide {
                title: "Research Question",
                content: "Primary Research Question:\n[Main question being investigated]\n\nHypothesis:\n[Your hypothesis]\n\nSpecific Aims:\n• [Aim 1]\n• [Aim 2]\n• [Aim 3]",
            },
            TemplateSlide {
                title: "Methodology",
                content: "Study Design: [Type of study]\n\nSample:\n• Size: [N]\n• Population: [Description]\n• Selection Criteria: [Criteria]\n\nData Collection: [Methods used]",
            },
            TemplateSlide {
                title: "Results - Overview",
                content: "Participants:\n[Demographics and baseline characteristics]\n\nPrimary Outcome:\n[Main finding]\n\nStatistical Significance: [p-values, confidence intervals]",
            },
            TemplateSlide {
                title: "Key Findings",
                content: "Finding 1:\n[Description and significance]\n\nFinding 2:\n[Description and significance]\n\nFinding 3:\n[Description and significance]",
            },
            TemplateSlide {
                title: "Discussion",
                content: "Interpretation:\n[What the results mean]\n\nComparison with Literature:\n[How findings compare to existing research]\n\nLimitations:\n[Study limitations]",
            },
            TemplateSlide {
                title: "Conclusions & Implications",
                content: "Conclusions:\n[Main takeaways]\n\nClinical/Practical Implications:\n[How this impacts practice]\n\nFuture Research:\n[What should be studied next]",
            },
            TemplateSlide {
                title: "Acknowledgments",
                content: "Funding: [Grant sources]\n\nCollaborators:\n[Key contributors]\n\nThank you for your attention.\n\nQuestions?",
            },
        ],
    },
    PresentationTemplate {
        id: "training-session",
        name: "Training Session",
        description: "Educational workshop or training presentation",
        category: TemplateCategory::Education,
        icon: "GraduationCap",
        theme: ThemeId::WarmOrange,
        slides: &[
            TemplateSlide {
                title: "Training Session",
                content: "[Training Topic]\n\nInstructor: [Your Name]\nDate: [Date]\nDuration: [Duration]",
            },
            TemplateSlide {
                title: "Learning Objectives",
                content: "By the end of this session, you will be able to:\n\n1. [Objective 1]\n2. [Objective 2]\n3. [Objective 3]\n4. [Objective 4]",
            },
            TemplateSlide {
                title: "Agenda",
                content: "1. [Topic 1] - [Duration]\n2. [Topic 2] - [Duration]\n3. [Topic 3] - [Duration]\n4. Practice/Activity - [Duration]\n5. Q&A - [Duration]",
            },
            TemplateSlide {
                title: "Topic 1: [Name]",
                content: "Key Concepts:\n• [Concept 1]\n• [Concept 2]\n• [Concept 3]\n\nWhy This Matters:\n[Relevance and importance]",
            },
            TemplateSlide {
                title: "Topic 2: [Name]",
                content: "Key Concepts:\n• [Concept 1]\n• [Concept 2]\n• [Concept 3]\n\nWhy This Matters:\n[Relevance and importance]",
            },
            TemplateSlide {
                title: "Topic 3: [Name]",
                content: "Key Concepts:\n• [Concept 1]\n• [Concept 2]\n• [Concept 3]\n\nWhy This Matters:\n[Relevance and importance]",
            },
            TemplateSlide {
                title: "Hands-On Activity",
                content: "Exercise:\n[Description of practical activity]\n\nInstructions:\n1. [Step 1]\n2. [Step 2]\n3. [Step 3]\n\nTime: [Duration]",
            },
            TemplateSlide {
                title: "Key Takeaways",
                content: "Remember:\n• [Key point 1]\n• [Key point 2]\n• [Key point 3]\n\nBest Practices:\n• [Practice 1]\n• [Practice 2]",
            },
            TemplateSlide {
                title: "Resources & Next Steps",
                content: "Additional Resources:\n• [Resource 1]\n• [Resource 2]\n\nNext Steps:\n[What to do after this training]\n\nQuestions?",
            },
        ],
    },
    PresentationTemplate {
        id: "team-meeting",
        name: "Team Meeting",
        description: "Regular team sync and status update",
        category: TemplateCategory::General,
        icon: "Users",
        theme: ThemeId::ProfessionalBlue,
        slides: &[
            TemplateSlide {
                title: "Team Meeting",
                content: "[Team Name]\n[Date]\n\nAgenda: [Brief overview]",
            },
            TemplateSlide {
                title: "Agenda",
                content: "1. Updates & Announcements\n2. Project Status Reviews\n3. Discussion Topics\n4. Action Items\n5. Q&A",
            },
            TemplateSlide {
                title: "Updates & Announcements",
                content: "• [Update 1]\n• [Update 2]\n• [Update 3]\n\nUpcoming Events:\n• [Event 1] - [Date]\n• [Event 2] - [Date]",
            },
            TemplateSlide {
                title: "Project Status: [Project Name]",
                content: "Status: [On track/At risk/Delayed]\n\nCompleted This Week:\n• [Item 1]\n• [Item 2]\n\nPlanned for Next Week:\n• [Item 1]\n• [Item 2]",
            },
            TemplateSlide {
                title: "Discussion: [Topic]",
                content: "Context:\n[Background information]\n\nQuestions to Address:\n• [Question 1]\n• [Question 2]\n\n[Open discussion]",
            },
            TemplateSlide {
                title: "Action Items",
                content: "• [Owner 1]: [Action item] - [Due date]\n• [Owner 2]: [Action item] - [Due date]\n• [Owner 3]: [Action item] - [Due date]",
            },
            TemplateSlide {
                title: "Next Meeting",
                content: "Date: [Next meeting date]\nTime: [Time]\n\nTentative Topics:\n• [Topic 1]\n• [Topic 2]\n\nThank you!",
            },
        ],
    },
    PresentationTemplate {
        id: "blank",
        name: "Blank Presentation",
        description: "Start from scratch with a single blank slide",
        category: TemplateCategory::General,
        icon: "File",
        theme: ThemeId::ProfessionalBlue,
        slides: &[
            TemplateSlide {
                title: "Welcome",
                content: "Start editing your presentation here.",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn filters_by_category_in_catalog_order() {
        let medical: Vec<&str> = templates_by_category(TemplateCategory::Medical)
            .map(|t| t.id)
            .collect();
        assert_eq!(
            medical,
            vec!["medical-report", "clinical-rounds", "research-findings"]
        );
        assert_eq!(
            templates_by_category(TemplateCategory::Education).count(),
            1
        );
    }

    #[test]
    fn every_category_has_templates() {
        for info in &TEMPLATE_CATEGORIES {
            assert!(templates_by_category(info.id).next().is_some(), "{}", info.id);
        }
    }

    #[test]
    fn template_ids_are_unique() {
        let ids: HashSet<&str> = TEMPLATES.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), TEMPLATES.len());
    }

    #[test]
    fn instantiation_copies_slides_with_fresh_ids() {
        let template = template_by_id("business-pitch").unwrap();
        let deck = template.instantiate("Seed Round");
        assert_eq!(deck.title, "Seed Round");
        assert_eq!(deck.theme, ThemeId::CorporateGray);
        assert_eq!(deck.slides.len(), template.slides.len());
        assert_eq!(deck.slides[1].title, "The Problem");
        let ids: HashSet<&str> = deck.slides.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), deck.slides.len());
    }

    #[test]
    fn blank_template_has_one_slide() {
        let blank = template_by_id("blank").unwrap();
        assert_eq!(blank.slides.len(), 1);
        assert_eq!(blank.category, TemplateCategory::General);
        assert!(template_by_id("missing").is_none());
    }

    #[test]
    fn parses_category_names() {
        assert_eq!(
            TemplateCategory::from_str_opt("business"),
            Some(TemplateCategory::Business)
        );
        assert_eq!(TemplateCategory::from_str_opt("sports"), None);
    }
}
