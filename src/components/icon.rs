use yew::prelude::*;

/// Icons used on the page. The glyphs come from the lucide icon font loaded
/// in `index.html`; we only pick the class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Sparkles,
    ArrowRight,
    ShieldCheck,
    GraduationCap,
    LineChart,
    Wallet,
    Users,
    Trophy,
    Phone,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::Sparkles => "sparkles",
            Icon::ArrowRight => "arrow-right",
            Icon::ShieldCheck => "shield-check",
            Icon::GraduationCap => "graduation-cap",
            Icon::LineChart => "line-chart",
            Icon::Wallet => "wallet",
            Icon::Users => "users",
            Icon::Trophy => "trophy",
            Icon::Phone => "phone",
        }
    }

    pub fn class(self) -> String {
        format!("icon-{}", self.name())
    }
}

pub fn icon_view(icon: Icon, class: &'static str) -> Html {
    html! {
        <i class={classes!(icon.class(), class)} aria-hidden="true"></i>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_names_are_kebab_case() {
        assert_eq!(Icon::GraduationCap.class(), "icon-graduation-cap");
        assert_eq!(Icon::ArrowRight.class(), "icon-arrow-right");
        assert_eq!(Icon::Phone.class(), "icon-phone");
    }
}
