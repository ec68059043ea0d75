//! Built-in tree shown when no JSON file is given on the command line.

use super::item::ExplorerItem;

pub fn sample_tree() -> ExplorerItem {
    use ExplorerItem as I;

    I::folder(
        "root",
        vec![
            I::folder(
                "Documents",
                vec![
                    I::file("report.pdf", "1.2MB"),
                    I::file("notes.txt", "4KB"),
                    I::folder(
                        "Work",
                        vec![
                            I::file("roadmap.md", "12KB"),
                            I::file("notes.txt", "2KB"),
                        ],
                    ),
                ],
            ),
            I::folder(
                "Pictures",
                vec![I::file("holiday.jpg", "3.4MB"), I::file("avatar.png", "220KB")],
            ),
            I::folder(
                "src",
                vec![
                    I::file("index.ts", "2KB"),
                    I::folder("utils", vec![I::file("math.ts", "500B")]),
                ],
            ),
            I::file("README.md", "1KB"),
        ],
    )
}
