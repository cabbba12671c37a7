//! Home Page
//!
//! Static hero, about, skills and call-to-action sections.

use leptos::prelude::*;
use leptos_router::components::A;

/// Skill cards: (icon, heading, stack)
const SKILLS: &[(&str, &str, &str)] = &[
    ("⚛️", "Front-End Development", "React, JavaScript, HTML5, CSS3, Tailwind CSS"),
    ("🚀", "Back-End Development", "Node.js, Express, REST APIs, Authentication"),
    ("💾", "Database & Tools", "MongoDB, Git, GitHub, Deployment"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <section class="hero">
                <h1>"Welcome to My Portfolio"</h1>
                <p>"Full-Stack Developer passionate about creating beautiful and functional web applications"</p>
                <div class="hero-actions">
                    <A href="/projects">"View Projects"</A>
                    <A href="/contact">"Contact Me"</A>
                </div>
            </section>

            <section class="about">
                <h2>"About Me"</h2>
                <p>
                    "I'm a passionate full-stack developer with experience in building modern web \
                     applications using cutting-edge technologies. I specialize in creating responsive, \
                     user-friendly interfaces and robust back-end systems."
                </p>
                <p>
                    "My expertise includes React, Node.js, Express, MongoDB, and various other tools and \
                     frameworks. I'm constantly learning and staying up-to-date with the latest web \
                     development trends."
                </p>
                <p>
                    "When I'm not coding, you can find me exploring new technologies, contributing to \
                     open-source projects, or writing about my development journey on my blog."
                </p>
            </section>

            <section class="skills">
                <h2>"Skills"</h2>
                <div class="skills-grid">
                    {SKILLS.iter().map(|(icon, heading, stack)| view! {
                        <div class="skill-card">
                            <div class="skill-icon">{*icon}</div>
                            <h3>{*heading}</h3>
                            <p>{*stack}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section class="cta">
                <h2>"Let's Work Together"</h2>
                <p>"I'm always open to discussing new projects and opportunities"</p>
                <A href="/contact">"Get In Touch"</A>
            </section>
        </div>
    }
}
