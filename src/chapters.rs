/// 内置章节列表，顺序决定文件编号
pub static CHAPTERS: &[&str] = &[
    "Setup",
    "Data Definition Language (DDL)",
    "Data Manipulation Language (DML)",
    "Data Query Language (DQL)",
    "Data Control Language (DCL)",
    "Transaction Control Language (TCL)",
    "Table Relationships and Constraints",
    "Data Types and Their Manipulation",
    "Indexes",
    "Triggers",
    "Stored Procedures",
    "Functions",
    "Views",
    "Partitions",
    "Error Handling",
    "Database Security",
    "Query Optimization",
    "Concurrency Control",
    "Backup and Recovery",
    "MySQL Specific Nuances",
    "Auditing and Monitoring User Activity",
    "Practical Use Cases and Examples: Common Pitfalls",
    "Connecting To MySQL",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub index: usize, // 从1开始
    pub title: String,
    pub filename: String,
}
