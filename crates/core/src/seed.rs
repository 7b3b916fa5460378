//! Content the local backend starts from on first run.

use chrono::{TimeZone, Utc};

use crate::project::Project;
use crate::types::Timestamp;

fn seeded_at(day: u32) -> Timestamp {
    Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

/// Default project list, newest first.
pub fn default_projects() -> Vec<Project> {
    vec![
        Project {
            id: "3".to_string(),
            title: "Task Manager".to_string(),
            description: "Gestor de tareas colaborativo en tiempo real".to_string(),
            full_description: "Tableros kanban con sincronización en tiempo real, etiquetas y \
                               recordatorios por correo."
                .to_string(),
            tags: tags(&["React", "Node.js", "PostgreSQL"]),
            image_url: "/placeholder.svg".to_string(),
            repo_url: "https://github.com/kevxlx/task-manager".to_string(),
            demo_url: "https://task-manager.demo.app".to_string(),
            featured: false,
            created_at: seeded_at(3),
        },
        Project {
            id: "2".to_string(),
            title: "Weather Dashboard".to_string(),
            description: "Panel meteorológico con pronósticos y mapas".to_string(),
            full_description: "Consume APIs públicas de clima, cachea resultados y muestra \
                               pronósticos de siete días con gráficos interactivos."
                .to_string(),
            tags: tags(&["TypeScript", "React", "Tailwind"]),
            image_url: "/placeholder.svg".to_string(),
            repo_url: "https://github.com/kevxlx/weather-dashboard".to_string(),
            demo_url: "https://weather.demo.app".to_string(),
            featured: true,
            created_at: seeded_at(2),
        },
        Project {
            id: "1".to_string(),
            title: "E-commerce Platform".to_string(),
            description: "Tienda en línea con carrito y pagos".to_string(),
            full_description: "Catálogo de productos, carrito persistente, pasarela de pagos y \
                               panel de administración de pedidos."
                .to_string(),
            tags: tags(&["Next.js", "Stripe", "Tailwind"]),
            image_url: "/placeholder.svg".to_string(),
            repo_url: "https://github.com/kevxlx/ecommerce".to_string(),
            demo_url: "https://shop.demo.app".to_string(),
            featured: true,
            created_at: seeded_at(1),
        },
    ]
}
