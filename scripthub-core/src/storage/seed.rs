//! Sample catalog loaded into `MemStorage::new()`
//!
//! Rows are listed in insertion order; ids follow from position.

use crate::models::{Category, Id, Script};

struct SeedCategory {
    name: &'static str,
    slug: &'static str,
    icon: &'static str,
    description: &'static str,
}

struct SeedScript {
    name: &'static str,
    description: &'static str,
    category: &'static str,
    code: &'static str,
    views: u64,
    downloads: u64,
    rating: i32,
    is_popular: bool,
    is_new: bool,
    is_featured: bool,
    status: &'static str,
}

const CATEGORIES: &[SeedCategory] = &[
    SeedCategory {
        name: "Все скрипты",
        slug: "all",
        icon: "fas fa-th-large",
        description: "Все доступные скрипты",
    },
    SeedCategory {
        name: "Игровые скрипты",
        slug: "game",
        icon: "fas fa-gamepad",
        description: "Скрипты для конкретных игр",
    },
    SeedCategory {
        name: "Утилиты",
        slug: "utility",
        icon: "fas fa-tools",
        description: "Общие скрипты-утилиты",
    },
    SeedCategory {
        name: "Админ скрипты",
        slug: "admin",
        icon: "fas fa-crown",
        description: "Административные инструменты",
    },
    SeedCategory {
        name: "Эксплойт скрипты",
        slug: "exploit",
        icon: "fas fa-bug",
        description: "Скрипты для обхода и эксплоитов",
    },
    SeedCategory {
        name: "GUI скрипты",
        slug: "gui",
        icon: "fas fa-window-maximize",
        description: "Скрипты с графическим интерфейсом",
    },
];

const SCRIPTS: &[SeedScript] = &[
    SeedScript {
        name: "Infinite Jump Script",
        description: "Allows unlimited jumping in any Roblox game. Perfect for parkour games and exploration.",
        category: "game",
        code: include_str!("../../seed/infinite_jump.lua"),
        views: 1200,
        downloads: 856,
        rating: 49,
        is_popular: true,
        is_new: false,
        is_featured: false,
        status: "Popular",
    },
    SeedScript {
        name: "Admin Commands Hub",
        description: "Comprehensive admin commands system with GUI. Includes kick, ban, teleport, and more.",
        category: "admin",
        code: include_str!("../../seed/admin_commands.lua"),
        views: 892,
        downloads: 445,
        rating: 47,
        is_popular: false,
        is_new: true,
        is_featured: false,
        status: "New",
    },
    SeedScript {
        name: "Speed Boost Utility",
        description: "Customizable speed boost script with GUI controls. Adjust walkspeed and jumppower dynamically.",
        category: "utility",
        code: include_str!("../../seed/speed_boost.lua"),
        views: 2100,
        downloads: 1300,
        rating: 48,
        is_popular: true,
        is_new: false,
        is_featured: false,
        status: "Verified",
    },
    SeedScript {
        name: "Universal ESP GUI",
        description: "Advanced ESP system with customizable GUI. See players through walls with distance indicators.",
        category: "gui",
        code: include_str!("../../seed/universal_esp.lua"),
        views: 1800,
        downloads: 972,
        rating: 49,
        is_popular: false,
        is_new: false,
        is_featured: false,
        status: "Premium",
    },
    SeedScript {
        name: "Noclip Toggle",
        description: "Simple noclip script with toggle functionality. Walk through walls and objects with ease.",
        category: "exploit",
        code: include_str!("../../seed/noclip_toggle.lua"),
        views: 3200,
        downloads: 2100,
        rating: 46,
        is_popular: true,
        is_new: false,
        is_featured: false,
        status: "Updated",
    },
    SeedScript {
        name: "Aimbot System",
        description: "Advanced aimbot with customizable settings. Works with most FPS games on Roblox.",
        category: "game",
        code: include_str!("../../seed/aimbot.lua"),
        views: 2700,
        downloads: 1500,
        rating: 44,
        is_popular: false,
        is_new: false,
        is_featured: false,
        status: "Advanced",
    },
    SeedScript {
        name: "Universal Script Hub",
        description: "The ultimate collection of scripts in one GUI. Includes admin commands, exploits, utilities, and more. Regular updates with new features.",
        category: "gui",
        code: include_str!("../../seed/universal_hub.lua"),
        views: 15200,
        downloads: 15200,
        rating: 49,
        is_popular: true,
        is_new: false,
        is_featured: true,
        status: "Featured",
    },
    SeedScript {
        name: "Advanced Exploit Suite",
        description: "Professional-grade exploit tools with advanced features. Perfect for experienced users looking for powerful functionality.",
        category: "exploit",
        code: include_str!("../../seed/exploit_suite.lua"),
        views: 8700,
        downloads: 8700,
        rating: 48,
        is_popular: true,
        is_new: false,
        is_featured: true,
        status: "Editor's Choice",
    },
    SeedScript {
        name: "R4D Hub",
        description: "Популярный universal скрипт hub с поддержкой множества игр",
        // No category row uses this slug.
        category: "universal",
        code: include_str!("../../seed/r4d_hub.lua"),
        views: 8950,
        downloads: 7240,
        rating: 46,
        is_popular: true,
        is_new: false,
        is_featured: false,
        status: "Popular",
    },
];

/// Seed categories with ids assigned from 1 in list order.
pub(crate) fn categories() -> impl Iterator<Item = Category> {
    CATEGORIES.iter().zip(1..).map(|(seed, id): (&SeedCategory, Id)| Category {
        id,
        name: seed.name.to_owned(),
        slug: seed.slug.to_owned(),
        icon: seed.icon.to_owned(),
        description: Some(seed.description.to_owned()),
    })
}

/// Seed scripts with ids assigned from 1 in list order.
pub(crate) fn scripts() -> impl Iterator<Item = Script> {
    SCRIPTS.iter().zip(1..).map(|(seed, id): (&SeedScript, Id)| Script {
        id,
        name: seed.name.to_owned(),
        description: seed.description.to_owned(),
        category: seed.category.to_owned(),
        code: seed.code.to_owned(),
        image: None,
        views: seed.views,
        downloads: seed.downloads,
        rating: seed.rating,
        is_popular: seed.is_popular,
        is_new: seed.is_new,
        is_featured: seed.is_featured,
        status: seed.status.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_list_order() {
        let ids: Vec<Id> = scripts().map(|s| s.id).collect();
        assert_eq!(ids, (1..=SCRIPTS.len() as Id).collect::<Vec<_>>());

        let slugs: Vec<String> = categories().map(|c| c.slug).collect();
        assert_eq!(slugs, ["all", "game", "utility", "admin", "exploit", "gui"]);
    }

    #[test]
    fn code_payloads_embedded() {
        for script in scripts() {
            assert!(script.code.starts_with("--"), "{} has no Lua header", script.name);
        }
    }

    #[test]
    fn seed_script_slugs_are_lowercase() {
        assert!(scripts().all(|s| s.category == s.category.to_lowercase()));
    }
}
