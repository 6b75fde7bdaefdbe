use yew::prelude::*;

use crate::components::floating_whatsapp::FloatingWhatsApp;
use crate::components::school_contact_modal::SchoolContactModal;

const HERO_BADGES: [&str; 3] = ["NEP 2020 Aligned", "ISO Certified", "Startup India"];

const STATS: [(&str, &str); 4] = [
    ("6,000+", "Students Trained"),
    ("50+", "Partner Schools"),
    ("100%", "NEP 2020 Aligned"),
    ("ISO", "Certified Programs"),
];

const VISION_CARDS: [(&str, &str, &str); 4] = [
    (
        "https://images.stockcake.com/public/5/9/1/591793ca-e5fb-4f9a-9b89-637baa29386c_large/kids-computer-class-stockcake.jpg",
        "Replace Rote Learning",
        "Transform traditional classrooms into hands-on learning with smart technology.",
    ),
    (
        "https://www.iitms.co.in/blog/img/nep-2024-complete-guide-info.webp",
        "NEP 2020 Aligned Skills",
        "Skill based curricula fully matched & aligned with National Education Policy 2020.",
    ),
    (
        "https://www.euroschoolindia.com/blogs/wp-content/uploads/2023/05/critical-thinking.jpg",
        "Critical Thinking",
        "Problem-solving & real-world projects that enhance logical reasoning.",
    ),
    (
        "https://www.kuder.com/wp-content/uploads/2023/11/access-and-diversity-blog-67900d15906a8.webp",
        "Career Readiness",
        "Prepare students for competitive exams and future internships.",
    ),
];

const SERVICE_CARDS: [(&str, &str, &str); 6] = [
    (
        "https://ulipsu.com/wp-content/uploads/2024/01/Artboard-30-copy-3-1-850x600.png",
        "NEP 2020-Aligned Curriculum",
        "Standardized skills for Class 5-12 students through industry-mapped learning.",
    ),
    (
        "https://www.tbsnews.net/sites/default/files/styles/social_share/public/images/2022/08/08/iso-9001-certification.png",
        "ISO-Certified Training Standards",
        "Quality training guaranteed by international certification standards.",
    ),
    (
        "https://media.licdn.com/dms/image/v2/D5612AQEClDebtRwWVg/article-cover_image-shrink_600_2000/article-cover_image-shrink_600_2000/0/1692686453112?e=2147483647&v=beta&t=tGr6qr2e2AyH3sADeRuYEYxRfIfEOrdAp1Uxff-YTAY",
        "Industry-Driven Project Orientation",
        "Hands-on projects simulate real-industry challenges and environments.",
    ),
    (
        "https://www.mentoringcomplete.com/wp-content/uploads/2023/11/A-Complete-Guide-to-Mentorship-Program-Structure-and-Expert-Tips.webp",
        "Expert Mentorship",
        "Live interaction sessions with industry professionals and expert mentors.",
    ),
    (
        "https://www.asuprepdigital.org/wp-content/uploads/2024/09/hybrid-vs-online-learning.jpg",
        "Online & Hybrid Delivery",
        "Flexible learning modules delivered through our advanced LMS portal.",
    ),
    (
        "https://www.teachermagazine.com/assets/images/teacher/Expert-QA-School-experiences-and-student-performance-lower-res.jpg",
        "Performance & Impact Reports",
        "Detailed results tracking to show student progress and learning outcomes.",
    ),
];

const FRAMEWORK_LEVELS: [(&str, &str, &str, &[&str], &str); 4] = [
    (
        "LEVEL 1",
        "Foundation & Basics",
        "Class 5-8",
        &["Python", "Web Development", "Robotics", "IoT"],
        "level-1",
    ),
    (
        "LEVEL 2",
        "Intelligent Systems",
        "Class 8-10",
        &["Data Science", "Machine Learning", "Data Viz"],
        "level-2",
    ),
    (
        "LEVEL 3",
        "Applied AI",
        "Class 10-12",
        &["AI Ethics", "NLP", "Computer Vision"],
        "level-3",
    ),
    (
        "LEVEL 4",
        "Specialized Skills",
        "Class 12+",
        &["App Dev", "Cybersecurity", "Cloud", "Blockchain"],
        "level-4",
    ),
];

const AI_TOPICS: [&str; 3] = ["Student Assessment", "Learning Path", "Career Roadmaps"];

#[function_component(ForSchools)]
pub fn for_schools() -> Html {
    let modal_open = use_state(|| false);
    let stats_ref = use_node_ref();

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| modal_open.set(true))
    };
    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(false))
    };
    let scroll_to_stats = {
        let stats_ref = stats_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(element) = stats_ref.cast::<web_sys::Element>() {
                let mut options = web_sys::ScrollIntoViewOptions::new();
                options.behavior(web_sys::ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })
    };

    html! {
        <div class="for-schools-page">
            <section class="schools-hero">
                <div class="container hero-grid">
                    <div class="hero-content">
                        <div class="hero-badges">
                            { for HERO_BADGES.iter().map(|&badge| html! { <span class="badge">{badge}</span> }) }
                        </div>
                        <h1>
                            {"Transforming "}<br />
                            {"School Education "}<br />
                            {"for a "}<span class="highlight">{"Skill-Driven Future"}</span>
                        </h1>
                        <p>
                            {"Empowering schools with NEP 2020-aligned, industry-led learning and \
                              skills that prepare students for tomorrow's careers."}
                        </p>
                        <div class="hero-actions">
                            <button class="btn-orange" onclick={open_modal}>{"Implement at your school"}</button>
                            <button class="btn-outline" onclick={scroll_to_stats}>{"Learn More"}</button>
                        </div>
                    </div>
                    <div class="hero-media">
                        <div class="image-wrapper">
                            <img src="/assets/school-banner.jpeg" alt="Skill Driven Future" />
                            <div class="stat-overlay">
                                <span class="stat-count">{"6,000+"}</span>
                                <span class="stat-label">{"Students Joined"}</span>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="stats-bar" ref={stats_ref}>
                <div class="container stats-grid">
                    {
                        for STATS.iter().map(|&(count, label)| html! {
                            <div class="stat-item">
                                <h3>{count}</h3>
                                <p>{label}</p>
                            </div>
                        })
                    }
                </div>
            </section>

            <section class="innovation-section">
                <div class="container">
                    <h2 class="section-title">{"Pioneering "}<span class="highlight">{"EdTech Innovation"}</span>{" in India"}</h2>
                    <div class="innovation-list">
                        <div class="innovation-item">
                            <div class="icon">{"🚀"}</div>
                            <p>
                                {"Inlighn Tech (InlighnX Global Private Limited) is a recognized EdTech StartUp recognized under the "}
                                <strong>{"Startup India (DPIIT)"}</strong>
                                {" initiative and backed by ISB Executive academics and industry leaders experts."}
                            </p>
                        </div>
                        <div class="innovation-item">
                            <div class="icon">{"🏆"}</div>
                            <p>
                                {"Recognized as the "}
                                <strong>{"\"Best Emerging EdTech StartUp\""}</strong>
                                {" at the Global Business Awards 2021, Inlighn Tech has successfully trained "}
                                <strong>{"5,000+ students"}</strong>
                                {" across India and abroad through immersive, project-based learning programs."}
                            </p>
                        </div>
                        <div class="mission-box">
                            <div class="mission-icon">{"🎯"}</div>
                            <div class="mission-content">
                                <span class="mission-label">{"Our Mission"}</span>
                                <p>{"\"To bridge the gap between school education and real-world industry skills—starting at the school level.\""}</p>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="vision-section">
                <div class="container">
                    <span class="subtitle">{"OUR VISION"}</span>
                    <h2 class="section-title">{"From Passive Learners to "}<span class="highlight">{"Student-Innovators"}</span></h2>
                    <div class="vision-grid">
                        {
                            for VISION_CARDS.iter().map(|&(image, title, text)| html! {
                                <div class="vision-card">
                                    <div class="card-image">
                                        <img src={image} alt={title} />
                                    </div>
                                    <h3>{title}</h3>
                                    <p>{text}</p>
                                </div>
                            })
                        }
                    </div>
                </div>
            </section>

            <section class="services-section">
                <div class="container">
                    <span class="subtitle">{"OUR SERVICES"}</span>
                    <h2 class="section-title">{"What We "}<span class="highlight">{"Provide Schools"}</span></h2>
                    <p class="section-intro">{"Comprehensive support to transform your school's educational experience."}</p>
                    <div class="services-grid">
                        {
                            for SERVICE_CARDS.iter().map(|&(image, title, text)| html! {
                                <div class="service-card">
                                    <div class="service-image">
                                        <img src={image} alt={title} />
                                    </div>
                                    <h3>{title}</h3>
                                    <p>{text}</p>
                                </div>
                            })
                        }
                    </div>
                </div>
            </section>

            <section class="framework-section">
                <div class="container">
                    <span class="subtitle">{"Program Overview"}</span>
                    <h2 class="section-title">{"4-Level School "}<span class="highlight">{"Program Framework"}</span></h2>
                    <p class="section-intro">{"A structured learning path from basics to advanced specializations."}</p>
                    <div class="framework-grid">
                        {
                            for FRAMEWORK_LEVELS.iter().map(|&(level, title, classes, tags, color)| html! {
                                <div class={classes!("framework-card", color)}>
                                    <div class="card-header">
                                        <span class="level">{level}</span>
                                        <h3>{title}</h3>
                                        <span class="class-range">{classes}</span>
                                    </div>
                                    <div class="tags">
                                        { for tags.iter().map(|&tag| html! { <span>{tag}</span> }) }
                                    </div>
                                </div>
                            })
                        }
                    </div>
                </div>
            </section>

            <section class="bottom-section">
                <div class="container">
                    <div class="ai-academics-box">
                        <div class="ai-icon">{"✨"}</div>
                        <div class="ai-header">
                            <span class="ai-tag">{"INLIGHN TECH"}</span>
                            <h3>{"AI for Academics"}</h3>
                        </div>
                        <p>
                            {"At Inlighn Tech, we build innovative AI solutions for schools, helping faculty \
                              automate administrative tasks and enable personalized learning for their students."}
                        </p>
                        <div class="ai-topics">
                            { for AI_TOPICS.iter().map(|&topic| html! { <span>{topic}</span> }) }
                        </div>
                    </div>
                </div>
            </section>

            <FloatingWhatsApp />
            <SchoolContactModal is_open={*modal_open} on_close={close_modal} />

            <style>
                {r#"
                .for-schools-page {
                    color: #1f2937;
                    background: #fff;
                }
                .for-schools-page .container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .for-schools-page .highlight {
                    color: #ff6b35;
                }
                .for-schools-page .section-title {
                    font-size: 2.4rem;
                    font-weight: 800;
                    text-align: center;
                    margin-bottom: 2rem;
                }
                .for-schools-page .subtitle {
                    display: block;
                    text-align: center;
                    font-size: 0.85rem;
                    font-weight: 700;
                    letter-spacing: 0.15em;
                    color: #ff6b35;
                    margin-bottom: 0.75rem;
                }
                .for-schools-page .section-intro {
                    text-align: center;
                    color: #6b7280;
                    max-width: 640px;
                    margin: 0 auto 3rem;
                }

                .schools-hero {
                    padding: 6rem 0 4rem;
                    background: linear-gradient(180deg, #fff7f2 0%, #ffffff 100%);
                }
                .hero-grid {
                    display: grid;
                    grid-template-columns: 1.1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .hero-badges {
                    display: flex;
                    gap: 0.75rem;
                    margin-bottom: 1.5rem;
                }
                .hero-badges .badge {
                    padding: 0.35rem 0.9rem;
                    background: #fff1e9;
                    color: #e55a2b;
                    font-size: 0.8rem;
                    font-weight: 600;
                    border-radius: 999px;
                }
                .hero-content h1 {
                    font-size: 3.2rem;
                    line-height: 1.15;
                    font-weight: 800;
                    margin-bottom: 1.25rem;
                }
                .hero-content p {
                    color: #6b7280;
                    font-size: 1.1rem;
                    margin-bottom: 2rem;
                    max-width: 34rem;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                }
                .btn-orange {
                    padding: 0.9rem 1.75rem;
                    background: #ff6b35;
                    color: #fff;
                    font-weight: 700;
                    border: none;
                    border-radius: 12px;
                    cursor: pointer;
                    box-shadow: 0 10px 20px rgba(255, 107, 53, 0.25);
                }
                .btn-orange:hover {
                    background: #e55a2b;
                }
                .btn-outline {
                    padding: 0.9rem 1.75rem;
                    background: transparent;
                    color: #1f2937;
                    font-weight: 700;
                    border: 2px solid #e5e7eb;
                    border-radius: 12px;
                    cursor: pointer;
                }
                .btn-outline:hover {
                    border-color: #ff6b35;
                    color: #ff6b35;
                }
                .hero-media .image-wrapper {
                    position: relative;
                }
                .hero-media img {
                    width: 100%;
                    border-radius: 20px;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.15);
                }
                .stat-overlay {
                    position: absolute;
                    bottom: -1.25rem;
                    left: -1.25rem;
                    background: #fff;
                    padding: 1rem 1.5rem;
                    border-radius: 16px;
                    box-shadow: 0 12px 24px rgba(0, 0, 0, 0.12);
                    display: flex;
                    flex-direction: column;
                }
                .stat-overlay .stat-count {
                    font-size: 1.5rem;
                    font-weight: 800;
                    color: #ff6b35;
                }
                .stat-overlay .stat-label {
                    font-size: 0.85rem;
                    color: #6b7280;
                }

                .stats-bar {
                    background: #111827;
                    padding: 3rem 0;
                }
                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    text-align: center;
                }
                .stat-item h3 {
                    font-size: 2.2rem;
                    font-weight: 800;
                    color: #ff6b35;
                }
                .stat-item p {
                    color: #d1d5db;
                }

                .innovation-section {
                    padding: 5rem 0;
                }
                .innovation-list {
                    max-width: 800px;
                    margin: 0 auto;
                }
                .innovation-item {
                    display: flex;
                    gap: 1.25rem;
                    align-items: flex-start;
                    margin-bottom: 1.75rem;
                }
                .innovation-item .icon {
                    font-size: 1.75rem;
                }
                .innovation-item p {
                    color: #4b5563;
                    line-height: 1.7;
                }
                .mission-box {
                    display: flex;
                    gap: 1.25rem;
                    align-items: center;
                    background: #fff7f2;
                    border-left: 4px solid #ff6b35;
                    border-radius: 12px;
                    padding: 1.5rem;
                }
                .mission-box .mission-icon {
                    font-size: 2rem;
                }
                .mission-label {
                    display: block;
                    font-size: 0.8rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    color: #e55a2b;
                    margin-bottom: 0.35rem;
                }

                .vision-section,
                .framework-section {
                    padding: 5rem 0;
                    background: #f9fafb;
                }
                .services-section {
                    padding: 5rem 0;
                }
                .vision-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }
                .vision-card,
                .service-card {
                    background: #fff;
                    border-radius: 16px;
                    overflow: hidden;
                    box-shadow: 0 8px 20px rgba(0, 0, 0, 0.06);
                }
                .vision-card .card-image img,
                .service-card .service-image img {
                    width: 100%;
                    height: 150px;
                    object-fit: cover;
                }
                .vision-card h3,
                .service-card h3 {
                    font-size: 1.05rem;
                    font-weight: 700;
                    margin: 1rem 1.25rem 0.5rem;
                }
                .vision-card p,
                .service-card p {
                    color: #6b7280;
                    font-size: 0.9rem;
                    margin: 0 1.25rem 1.25rem;
                    line-height: 1.6;
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }

                .framework-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }
                .framework-card {
                    background: #fff;
                    border-radius: 16px;
                    padding: 1.5rem;
                    border-top: 4px solid #ff6b35;
                    box-shadow: 0 8px 20px rgba(0, 0, 0, 0.06);
                }
                .framework-card.level-2 { border-top-color: #f59e0b; }
                .framework-card.level-3 { border-top-color: #3b82f6; }
                .framework-card.level-4 { border-top-color: #8b5cf6; }
                .framework-card .level {
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    color: #9ca3af;
                }
                .framework-card h3 {
                    font-size: 1.15rem;
                    font-weight: 700;
                    margin: 0.5rem 0;
                }
                .framework-card .class-range {
                    font-size: 0.85rem;
                    color: #6b7280;
                }
                .framework-card .tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-top: 1rem;
                }
                .framework-card .tags span {
                    padding: 0.3rem 0.7rem;
                    background: #f3f4f6;
                    border-radius: 999px;
                    font-size: 0.78rem;
                    color: #374151;
                }

                .bottom-section {
                    padding: 5rem 0;
                }
                .ai-academics-box {
                    background: linear-gradient(135deg, #111827 0%, #1f2937 100%);
                    color: #fff;
                    border-radius: 24px;
                    padding: 3rem;
                    text-align: center;
                }
                .ai-academics-box .ai-icon {
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }
                .ai-academics-box .ai-tag {
                    display: block;
                    font-size: 0.8rem;
                    font-weight: 700;
                    letter-spacing: 0.15em;
                    color: #ff6b35;
                    margin-bottom: 0.5rem;
                }
                .ai-academics-box h3 {
                    font-size: 1.8rem;
                    font-weight: 800;
                    margin-bottom: 1rem;
                }
                .ai-academics-box p {
                    color: #d1d5db;
                    max-width: 640px;
                    margin: 0 auto 1.5rem;
                }
                .ai-topics {
                    display: flex;
                    justify-content: center;
                    gap: 0.75rem;
                    flex-wrap: wrap;
                }
                .ai-topics span {
                    padding: 0.45rem 1rem;
                    background: rgba(255, 255, 255, 0.08);
                    border: 1px solid rgba(255, 107, 53, 0.35);
                    border-radius: 999px;
                    font-size: 0.85rem;
                }

                @media (max-width: 950px) {
                    .hero-grid {
                        grid-template-columns: 1fr;
                    }
                    .hero-content h1 {
                        font-size: 2.4rem;
                    }
                    .stats-grid,
                    .vision-grid,
                    .framework-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .services-grid {
                        grid-template-columns: 1fr;
                    }
                }
                @media (max-width: 600px) {
                    .stats-grid,
                    .vision-grid,
                    .framework-grid {
                        grid-template-columns: 1fr;
                    }
                    .hero-actions {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </div>
    }
}
