//! Built-in content shown before anything has been edited, and restored by
//! a reset.

use super::content::{ExperienceItem, ItemId, PortfolioItem, SkillCategory};
use super::locale::LocalizedText;

const FIGMA_BOARD: &str = "https://www.figma.com/board/fU2P2Vg1moT018IPE4hUku/Alfred-Klimov-Portfolio?node-id=0-1&p=f&t=rrYyfGgfMcV40GMb-0";

fn portfolio(
    id: &str,
    title: (&str, &str),
    description: (&str, &str),
    image: &str,
    link: &str,
) -> PortfolioItem {
    PortfolioItem {
        id: ItemId::new(id),
        title: LocalizedText::new(title.0, title.1),
        description: LocalizedText::new(description.0, description.1),
        image: image.to_string(),
        link: Some(link.to_string()),
        video_url: None,
    }
}

fn skills(id: &str, icon: &str, title: (&str, &str), names: &[&str]) -> SkillCategory {
    SkillCategory {
        id: ItemId::new(id),
        icon: icon.to_string(),
        title: LocalizedText::new(title.0, title.1),
        skills: names.iter().map(|s| s.to_string()).collect(),
    }
}

fn experience(id: &str, title: (&str, &str), period: &str) -> ExperienceItem {
    ExperienceItem {
        id: ItemId::new(id),
        title: LocalizedText::new(title.0, title.1),
        period: period.to_string(),
    }
}

/// Default portfolio items (6)
pub fn portfolio_items() -> Vec<PortfolioItem> {
    vec![
        portfolio(
            "1",
            ("UI/UX Portfolio (Figma)", "UI/UX\u{2011}Portfolio (Figma)"),
            (
                "Selected UI kits, component libraries and product screens designed in Figma.",
                "Ausgewählte UI\u{2011}Kits, Komponenten\u{2011}Bibliotheken und Produkt\u{2011}Screens in Figma.",
            ),
            "/images/portfolio/figma-ui-kit.jpg",
            FIGMA_BOARD,
        ),
        portfolio(
            "2",
            (
                "3D Product Visuals (Blender)",
                "3D\u{2011}Produktvisualisierungen (Blender)",
            ),
            (
                "Hard\u{2011}surface models, lighting and renders for product & motion use.",
                "Hard\u{2011}Surface\u{2011}Modelle, Beleuchtung und Renderings für Produkt & Motion.",
            ),
            "/images/portfolio/blender-product-visual.jpg",
            FIGMA_BOARD,
        ),
        portfolio(
            "3",
            (
                "2D Graphic Design (Photoshop)",
                "2D\u{2011}Grafikdesign (Photoshop)",
            ),
            (
                "Posters, promo assets, photo retouching and compositing.",
                "Poster, Promo\u{2011}Assets, Fotoretusche und Compositing.",
            ),
            "/images/portfolio/photoshop-retouch.jpg",
            FIGMA_BOARD,
        ),
        portfolio(
            "4",
            (
                "Web Development \u{2014} Laguna Paradise",
                "Web\u{2011}Entwicklung \u{2014} Laguna Paradise",
            ),
            (
                "Booking platform UI and backend integration (Next.js/Django).",
                "Buchungs\u{2011}Plattform\u{2011}UI und Backend\u{2011}Integration (Next.js/Django).",
            ),
            "/images/portfolio/laguna-paradise-web.jpg",
            "#",
        ),
        portfolio(
            "5",
            (
                "DROP\u{2019}EM ALL \u{2014} Telegram WebApp",
                "DROP\u{2019}EM ALL \u{2014} Telegram\u{2011}WebApp",
            ),
            (
                "Referral flows, payment UX and roulette mechanics for a Telegram app.",
                "Referral\u{2011}Flows, Payment\u{2011}UX und Roulette\u{2011}Mechaniken für eine Telegram\u{2011}App.",
            ),
            "/images/portfolio/dropemall-webapp.jpg",
            "#",
        ),
        portfolio(
            "6",
            (
                "Social Media Posts & Campaigns",
                "Social\u{2011}Media\u{2011}Posts & Kampagnen",
            ),
            (
                "Content design for posts/stories, motion snippets and ad creatives.",
                "Content\u{2011}Design für Posts/Stories, Motion\u{2011}Snippets und Anzeigen\u{2011}Creatives.",
            ),
            "/images/portfolio/social-posts-grid.jpg",
            "#",
        ),
    ]
}

/// Default skill categories (7)
pub fn skill_categories() -> Vec<SkillCategory> {
    vec![
        skills(
            "1",
            "🎨",
            ("Design", "Design"),
            &["Figma", "Photoshop", "Illustrator", "Canva", "Tilda", "InDesign", "Sketch"],
        ),
        skills(
            "2",
            "💻",
            ("Development", "Entwicklung"),
            &[
                "CSS",
                "TailwindCSS",
                "HTML",
                "Python",
                "Django",
                "Flask",
                "Next.js",
                "React",
                "Vue.js",
                "Node.js",
                "TypeScript",
                "JavaScript",
            ],
        ),
        skills(
            "3",
            "🤖",
            ("AI & Automation", "KI & Automatisierung"),
            &[
                "ChatGPT",
                "DeepSeek",
                "GitHub Copilot",
                "v0.dev",
                "Vercel",
                "Sora",
                "MidJourney",
                "Stable Diffusion",
                "LangChain",
            ],
        ),
        skills(
            "4",
            "🎧",
            ("Audio Production", "Audio-Produktion"),
            &["Ableton Live", "FL Studio", "Reaper", "Cubase", "Logic Pro", "Pro Tools", "Audacity"],
        ),
        skills(
            "5",
            "🎬",
            ("Video & Motion", "Video & Motion"),
            &[
                "After Effects",
                "Premiere Pro",
                "DaVinci Resolve",
                "Final Cut Pro",
                "Blender",
                "Cinema 4D",
            ],
        ),
        skills(
            "6",
            "🔧",
            ("Technical Skills", "Technische Fähigkeiten"),
            &[
                "Git & GitHub",
                "Docker",
                "Linux/Unix",
                "AWS/Cloud",
                "Database Design",
                "API Development",
                "CI/CD",
                "Terminal/CLI",
            ],
        ),
        skills(
            "7",
            "📊",
            ("Project Management", "Projektmanagement"),
            &[
                "Agile/Scrum",
                "Kanban",
                "Jira",
                "Trello",
                "Notion",
                "Slack",
                "Teams",
                "Time Management",
                "Resource Planning",
            ],
        ),
    ]
}

/// Default experience entries (3)
pub fn experience_items() -> Vec<ExperienceItem> {
    vec![
        experience(
            "1",
            (
                "Ahead Media \u{2014} Internship, Graphic Design",
                "Ahead Media \u{2014} Praktikum, Grafikdesign",
            ),
            "2023",
        ),
        experience(
            "2",
            ("Catering \u{2014} Team Member", "Catering \u{2014} Teammitglied"),
            "2022-2023",
        ),
        experience(
            "3",
            (
                "Freelance Projects \u{2014} Web Design & Development, Creative Projects",
                "Freelance Projekte \u{2014} Webdesign & Entwicklung, Kreative Projekte",
            ),
            "2021-Present",
        ),
    ]
}
