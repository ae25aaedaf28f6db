//! School data model: teachers, subjects, students, grades and houses.
//!
//! Every node and edge carries its own `extra_style`, so nothing here goes
//! through default style synthesis.

use serde_json::{json, Value};

use crate::graph::{attrs, Graph, DATA_ATTR, STYLE_ATTR};

fn add_node(graph: &mut Graph, id: &str, style: Value, data: Value) {
    graph.add_node(id, attrs([(STYLE_ATTR, style), (DATA_ATTR, data)]));
}

fn add_edge(graph: &mut Graph, source: &str, target: &str, style: Value) {
    graph.add_edge(source, target, attrs([(STYLE_ATTR, style)]));
}

fn teacher_style() -> Value {
    json!({
        "color": "#1f2937",
        "stroke_color": "#ef4444",
        "stroke_width": 3,
        "radius": 28,
        "text_color": "#ef4444",
        "font_size": "14px",
        "font_weight": "bold",
        "text_outline": "#ffffff",
        "glow": true,
        "icon": "fa-solid fa-chalkboard-user",
        "icon_size": "24px",
        "icon_color": "#ef4444",
    })
}

fn subject_style(color: &str, text_color: &str, outline: &str, icon: &str) -> Value {
    json!({
        "color": color,
        "radius": 40,
        "text_color": text_color,
        "font_size": "18px",
        "font_weight": "600",
        "text_outline": outline,
        "glow": true,
        "icon": icon,
        "icon_size": "32px",
        "icon_color": text_color,
    })
}

fn student_style(color: &str) -> Value {
    json!({
        "color": color,
        "radius": 18,
        "text_color": "#e2e8f0",
        "icon": "fa-solid fa-user-graduate",
        "icon_size": "14px",
        "icon_color": "#fff",
    })
}

fn grade_style(color: &str, icon: &str) -> Value {
    json!({
        "color": color,
        "radius": 12,
        "opacity": 0.9,
        "stroke_color": "#fff",
        "stroke_width": 2,
        "stroke_dash": "3,3",
        "icon": icon,
        "icon_size": "10px",
        "icon_color": "#fff",
    })
}

fn teaches() -> Value {
    json!({
        "color": "#ef4444",
        "stroke_width": 4,
        "label": "teaches",
        "font_size": "11px",
        "arrow": true,
    })
}

fn enrolled(color: &str) -> Value {
    json!({"color": color, "opacity": 0.5, "arrow": true})
}

fn graded(color: &str, label: &str) -> Value {
    json!({"color": color, "dash": "5,5", "label": label, "arrow": true})
}

fn member_of(color: &str) -> Value {
    json!({"color": color, "opacity": 0.3})
}

pub fn school() -> Graph {
    let mut g = Graph::new_directed("school");

    for teacher in ["Prof. Snape", "Prof. McGonagall"] {
        add_node(&mut g, teacher, teacher_style(), json!({"role": "Teacher"}));
    }

    add_node(
        &mut g,
        "Potions",
        subject_style("#22c55e", "#f0fdf4", "#000000", "fa-solid fa-flask"),
        json!({"type": "Subject"}),
    );
    add_node(
        &mut g,
        "Transfiguration",
        subject_style("#22c55e", "#f0fdf4", "#000000", "fa-solid fa-wand-magic-sparkles"),
        json!({"type": "Subject"}),
    );

    let students = [
        ("Harry", "#3b82f6"),
        ("Hermione", "#3b82f6"),
        ("Ron", "#3b82f6"),
        ("Draco", "#10b981"),
    ];
    for (name, color) in students {
        add_node(&mut g, name, student_style(color), json!({"role": "Student"}));
    }

    add_node(
        &mut g,
        "Grade: O",
        grade_style("#eab308", "fa-solid fa-star"),
        json!({"value": "Outstanding"}),
    );
    add_node(
        &mut g,
        "Grade: E",
        grade_style("#f59e0b", "fa-solid fa-star-half-stroke"),
        json!({"value": "Exceeds Expectations"}),
    );

    add_edge(&mut g, "Prof. Snape", "Potions", teaches());
    add_edge(&mut g, "Prof. McGonagall", "Transfiguration", teaches());

    add_edge(&mut g, "Harry", "Potions", enrolled("#60a5fa"));
    add_edge(&mut g, "Harry", "Transfiguration", enrolled("#60a5fa"));
    add_edge(&mut g, "Hermione", "Potions", enrolled("#60a5fa"));
    add_edge(&mut g, "Hermione", "Transfiguration", enrolled("#60a5fa"));
    add_edge(&mut g, "Ron", "Transfiguration", enrolled("#60a5fa"));
    add_edge(&mut g, "Draco", "Potions", enrolled("#10b981"));

    add_edge(&mut g, "Hermione", "Grade: O", graded("#eab308", "achieved"));
    add_edge(&mut g, "Grade: O", "Transfiguration", graded("#eab308", "in"));
    add_edge(&mut g, "Harry", "Grade: E", graded("#f59e0b", "achieved"));
    add_edge(&mut g, "Grade: E", "Potions", graded("#f59e0b", "in"));

    add_node(
        &mut g,
        "Albus Dumbledore",
        json!({
            "color": "#1f2937",
            "stroke_color": "#fbbf24",
            "stroke_width": 4,
            "radius": 35,
            "text_color": "#fbbf24",
            "font_size": "16px",
            "font_weight": "bold",
            "text_outline": "#000",
            "glow": true,
            "icon": "fa-solid fa-hat-wizard",
            "icon_size": "30px",
            "icon_color": "#fbbf24",
        }),
        json!({"role": "Headmaster"}),
    );
    for teacher in ["Prof. Snape", "Prof. McGonagall"] {
        add_edge(
            &mut g,
            "Albus Dumbledore",
            teacher,
            json!({"color": "#fbbf24", "arrow": true, "label": "manages"}),
        );
    }

    add_node(
        &mut g,
        "Defense Against the Dark Arts",
        subject_style("#7f1d1d", "#fca5a5", "#000", "fa-solid fa-shield-halved"),
        json!({"type": "Subject"}),
    );
    add_edge(
        &mut g,
        "Prof. Snape",
        "Defense Against the Dark Arts",
        json!({"color": "#ef4444", "arrow": true, "label": "covets"}),
    );

    let houses = [
        ("Gryffindor", "#ef4444", "fa-solid fa-fire"),
        ("Slytherin", "#16a34a", "fa-solid fa-snake"),
        ("Ravenclaw", "#3b82f6", "fa-solid fa-crow"),
        ("Hufflepuff", "#eab308", "fa-solid fa-leaf"),
    ];
    for (name, color, icon) in houses {
        add_node(
            &mut g,
            name,
            json!({
                "color": color,
                "radius": 25,
                "text_color": color,
                "font_weight": "bold",
                "text_outline": "#fff",
                "icon": icon,
                "icon_size": "20px",
                "icon_color": "#fff",
            }),
            json!({"type": "House"}),
        );
    }

    add_edge(&mut g, "Harry", "Gryffindor", member_of("#ef4444"));
    add_edge(&mut g, "Hermione", "Gryffindor", member_of("#ef4444"));
    add_edge(&mut g, "Ron", "Gryffindor", member_of("#ef4444"));
    add_edge(&mut g, "Draco", "Slytherin", member_of("#16a34a"));

    add_node(&mut g, "Luna", student_style("#3b82f6"), json!({"role": "Student"}));
    add_edge(&mut g, "Luna", "Ravenclaw", member_of("#3b82f6"));
    add_edge(&mut g, "Luna", "Transfiguration", enrolled("#60a5fa"));

    g
}
