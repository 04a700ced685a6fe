// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The portfolio's built-in searchable content.

use crate::types::SearchRecord;

/// Home, About, Skills, Projects and Contact, in page order.
pub fn default_records() -> Vec<SearchRecord> {
    vec![
        SearchRecord::new(
            "Home",
            "Welcome to my portfolio. I am a software developer.",
            "home",
        )
        .with_kind("page"),
        SearchRecord::new(
            "About Me",
            "I am a passionate developer with expertise in modern web technologies.",
            "about",
        )
        .with_kind("page"),
        SearchRecord::new(
            "Skills",
            "HTML5, CSS3, JavaScript, React, Node.js, Python, Database",
            "skills",
        )
        .with_kind("page"),
        SearchRecord::new(
            "Projects",
            "E-commerce Website, Task Management App, Weather Dashboard",
            "projects",
        )
        .with_kind("page"),
        SearchRecord::new(
            "Contact",
            "Get in touch with me for collaborations and opportunities",
            "contact",
        )
        .with_kind("page"),
    ]
}
