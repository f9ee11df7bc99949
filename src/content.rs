// SPDX-License-Identifier: MPL-2.0
//! Static marketing copy for the showcase page.
//!
//! Everything here is plain data. The `ui` modules decide how it is laid out.

use crate::application::page::Section;

pub const PROJECT_NAME: &str = "RayTracerNG";
pub const TAGLINE: &str = "Real-time 2D Ray Tracing Engine with Modern OpenGL";
pub const REPOSITORY_URL: &str = "https://github.com/Nischaya008/RayTracerNG";
pub const COPYRIGHT: &str = "© 2025 RayTracerNG. All rights reserved.";

/// A titled card used by the feature, tech stack and contribute grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
}

/// An architecture module and the modules it talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleCard {
    pub name: &'static str,
    pub description: &'static str,
    pub connections: &'static [&'static str],
}

/// A downloadable artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Download {
    pub title: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub size: &'static str,
    pub url: &'static str,
}

/// An external profile link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// Heading and subtitle for a page section.
#[must_use]
pub fn section_heading(section: Section) -> (&'static str, &'static str) {
    match section {
        Section::Features => (
            "Powerful Features",
            "Discover what makes RayTracerNG a cutting-edge ray tracing engine",
        ),
        Section::TechStack => (
            "Tech Stack",
            "Built with modern technologies for optimal performance",
        ),
        Section::Architecture => (
            "Architecture",
            "Clean and modular design for optimal performance",
        ),
        Section::Gallery => ("Gallery", "Watch RayTracerNG in action"),
        Section::Download => ("Download", "Get started with RayTracerNG today"),
        Section::Contribute => ("Contribute", "Join me in building the future of ray tracing"),
    }
}

pub const FEATURES: [Card; 5] = [
    Card {
        title: "Real-Time Ray Tracing",
        description: "Experience stunning light reflections and physics in real-time with configurable ray properties.",
    },
    Card {
        title: "Interactive Light Physics",
        description: "Manipulate light sources and observe complex reflection patterns with intuitive controls.",
    },
    Card {
        title: "Configurable Reflections",
        description: "Customize reflection depth, intensity, and length preservation to achieve desired effects.",
    },
    Card {
        title: "Performance Monitoring",
        description: "Track CPU usage, GPU performance, and frame times with built-in monitoring tools.",
    },
    Card {
        title: "High-DPI & Cross-Platform",
        description: "Enjoy crisp visuals on high-DPI displays with full cross-platform compatibility.",
    },
];

pub const TECH_STACK: [Card; 6] = [
    Card {
        title: "C++17",
        description: "Modern C++ for high-performance graphics programming",
    },
    Card {
        title: "OpenGL 4.5+",
        description: "Advanced graphics API with shader-based rendering",
    },
    Card {
        title: "GLFW",
        description: "Cross-platform window management and input handling",
    },
    Card {
        title: "GLM",
        description: "Mathematics library for graphics applications",
    },
    Card {
        title: "ImGui",
        description: "Immediate mode GUI with docking support",
    },
    Card {
        title: "CMake",
        description: "Modern build system for cross-platform development",
    },
];

pub const ARCHITECTURE: [ModuleCard; 4] = [
    ModuleCard {
        name: "Window Management",
        description: "GLFW window handling, OpenGL context management, and input processing",
        connections: &["Renderer", "Scene"],
    },
    ModuleCard {
        name: "Renderer",
        description: "OpenGL state management, shader programs, and performance monitoring",
        connections: &["Scene", "GameObjects"],
    },
    ModuleCard {
        name: "Scene",
        description: "Object lifecycle management, collision detection, and ray-object interactions",
        connections: &["GameObjects"],
    },
    ModuleCard {
        name: "GameObjects",
        description: "Base GameObject class with specialized implementations for different object types",
        connections: &[],
    },
];

pub const DOWNLOADS: [Download; 2] = [
    Download {
        title: "Windows Installer",
        description: "Latest stable release for Windows",
        version: "v1.0",
        size: "2.72 MB",
        url: "https://github.com/Nischaya008/RayTracerNG/releases/download/RayTracerNG/RayTracerNG_Setup.exe",
    },
    Download {
        title: "Source Code",
        description: "Build from source with CMake",
        version: "v1.0",
        size: "1.67 MB",
        url: "https://github.com/Nischaya008/RayTracerNG/archive/refs/tags/RayTracerNG.zip",
    },
];

pub const SYSTEM_REQUIREMENTS: &str =
    "System Requirements: Windows 10/11, OpenGL 4.5+ compatible graphics card";

pub const CONTRIBUTION_STEPS: [Card; 4] = [
    Card {
        title: "Fork the Repository",
        description: "Start by forking the RayTracerNG repository to your GitHub account.",
    },
    Card {
        title: "Create a Branch",
        description: "Create a feature branch for your changes using a descriptive name.",
    },
    Card {
        title: "Make Changes",
        description: "Implement your changes following our coding standards and guidelines.",
    },
    Card {
        title: "Submit PR",
        description: "Create a pull request with a clear description of your changes.",
    },
];

pub const QUICK_START: &str = "\
# Clone the repository
git clone https://github.com/Nischaya008/RayTracerNG
cd RayTracerNG

# Create a new branch
git checkout -b feature/your-feature-name

# Build the project
./build.bat

# Run tests
./build/RayTracerNG.exe --test";

pub const ABOUT_PROJECT: Card = Card {
    title: "About RayTracerNG",
    description: "RayTracerNG is a high-performance, real-time 2D ray tracing application built with C++17 and modern OpenGL. It simulates realistic light behavior and reflections in an interactive scene, allowing users to manipulate light sources and obstacles dynamically.",
};

pub const ABOUT_AUTHOR: Card = Card {
    title: "About Me",
    description: "I am Nischaya Garg, a Computer Science Engineering student specializing in Artificial Intelligence and Machine Learning (Hons. IBM). This project showcases my expertise in C++17, OpenGL, GLFW, GLM, and ImGui through the development of a real-time 2D ray tracing engine, with a focus on performance, interactivity, and modern graphics programming.",
};

pub const SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink {
        label: "GitHub",
        url: "https://github.com/Nischaya008",
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/nischaya008/",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_has_a_heading() {
        for section in Section::ALL {
            let (title, subtitle) = section_heading(section);
            assert!(!title.is_empty());
            assert!(!subtitle.is_empty());
        }
    }

    #[test]
    fn architecture_connections_name_known_modules() {
        for module in ARCHITECTURE {
            for target in module.connections {
                assert!(ARCHITECTURE.iter().any(|m| m.name == *target));
            }
        }
    }
}
