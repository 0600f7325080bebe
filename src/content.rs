use crate::components::icon::Icon;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayCard {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

const fn card(icon: Icon, title: &'static str, description: &'static str) -> DisplayCard {
    DisplayCard { icon, title, description }
}

const fn stat(label: &'static str, value: &'static str) -> Stat {
    Stat { label, value }
}

// Hero
pub const HERO_BADGE: &str = "For education only — not investment advice";
pub const HERO_TAGLINE: &str = "Learn. Play. Plan. Protect.";
pub const HERO_HIGHLIGHT: &str = "Money made GenZ";
pub const HERO_PITCH: &str = "A fun, safe finance app for India’s youth. Micro-lessons, dummy stock trading, smart salary planning, mentor guidance, and insurance basics — all in one place.";
pub const HERO_STATS: [Stat; 3] = [
    stat("Virtual Cash", "₹1,00,000"),
    stat("Lessons", "100+"),
    stat("Mentors", "Verified"),
];

// Core pillars
pub const PILLARS_BADGE: &str = "Built for students and young professionals";
pub const PILLARS: [DisplayCard; 6] = [
    card(Icon::GraduationCap, "Learn", "Bite-sized lessons on money, budgeting, credit, and investing. Gamified quizzes, streaks, and progress badges keep it fun."),
    card(Icon::LineChart, "Play", "Practice with ₹1L virtual cash in a dummy stock market. No real money — just safe, hands-on learning."),
    card(Icon::Wallet, "Planner", "Track salary, visualize expenses, and get personalized saving recommendations for your goals."),
    card(Icon::Users, "Mentor", "Connect with verified finance mentors for 1:1 educational sessions. No tips or stock calls — only learning."),
    card(Icon::ShieldCheck, "Insurance 101", "Understand the importance of protection and connect with IRDAI-licensed advisors through a compliant referral model."),
    card(Icon::Trophy, "Community & Challenges", "Join fun challenges, share wins, and climb leaderboards with fellow GenZ learners."),
];

// Play
pub const PLAY_POINTS: [&str; 3] = [
    "Real-time like experience, purely educational",
    "No real trading. No investment recommendations",
    "Clear disclaimers and safety-first approach",
];
pub const PLAY_STATS: [Stat; 3] = [
    stat("Starter Cash", "₹1L"),
    stat("Mock Trades", "Unlimited"),
    stat("Risk", "Zero"),
];

// Planner
pub const PLANNER_STATS: [Stat; 3] = [
    stat("Smart Rules", "50/30/20"),
    stat("Insights", "Auto"),
    stat("Goals", "Custom"),
];
pub const PLANNER_CHECKLIST: [&str; 4] = [
    "Salary tracking",
    "Expense insights",
    "Savings recommendations",
    "Goal planning",
];

// Mentor
pub const MENTOR_CARDS: [DisplayCard; 2] = [
    card(Icon::Users, "Verified Profiles", "Thorough checks ensure mentors are authentic and qualified educators."),
    card(Icon::GraduationCap, "Education-first", "Clear boundaries — no recommendations, only concepts and frameworks."),
];

// Insurance 101
pub const INSURANCE_POINTS: [&str; 3] = [
    "Education-first content",
    "Verified, licensed partners",
    "Transparent disclaimers",
];
pub const INSURANCE_STATS: [Stat; 3] = [
    stat("Advisors", "IRDAI"),
    stat("Purpose", "Education"),
    stat("Compliance", "Strict"),
];

// Community & challenges
pub const COMMUNITY_BADGE: &str = "Leaderboards, streaks, and memes 🤝";
pub const COMMUNITY_CARDS: [DisplayCard; 3] = [
    card(Icon::Trophy, "Weekly Challenges", "Complete tasks, earn badges, and share wins with friends."),
    card(Icon::Users, "Campus Clubs", "College tie-ups and branded programs for real-world learning."),
    card(Icon::Sparkles, "Streaks & Rewards", "Keep the habit alive with daily streaks and surprise drops."),
];

// Revenue & safety
pub const SUSTAIN_POINTS: [&str; 4] = [
    "Commission on mentor sessions (educational calls)",
    "Subscription plans for premium lessons and webinars",
    "Referral commissions from verified insurance partners",
    "College tie-ups and branded educational programs",
];
pub const SAFETY_POINTS: [&str; 4] = [
    "No real trading or investment recommendations",
    "Clear disclaimers: For education only, not investment advice",
    "Mentors and insurance advisors are verified professionals",
    "IRDAI-compliant referral model for insurance partnerships",
];

// Footer
pub const VISION: &str = "“To become India’s #1 youth finance app that empowers every young person to learn, plan, and protect their financial future — safely and smartly.”";
pub const DISCLAIMER: &str = "Disclaimer: GenZ Money is for education only and does not provide investment advice. Markets are risky — do your own research.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pillars_cover_every_product_area() {
        let titles: Vec<&str> = PILLARS.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            vec!["Learn", "Play", "Planner", "Mentor", "Insurance 101", "Community & Challenges"]
        );
    }

    #[test]
    fn no_blank_copy() {
        let cards = PILLARS.iter().chain(&MENTOR_CARDS).chain(&COMMUNITY_CARDS);
        for c in cards {
            assert!(!c.title.trim().is_empty());
            assert!(!c.description.trim().is_empty());
        }
        let stats = HERO_STATS.iter().chain(&PLAY_STATS).chain(&PLANNER_STATS).chain(&INSURANCE_STATS);
        for s in stats {
            assert!(!s.label.is_empty() && !s.value.is_empty());
        }
    }

    #[test]
    fn disclaimers_say_education_only() {
        assert!(HERO_BADGE.contains("education only"));
        assert!(DISCLAIMER.contains("education only"));
        assert!(SAFETY_POINTS.iter().any(|p| p.contains("not investment advice")));
    }
}
