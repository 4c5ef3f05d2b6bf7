//! Sample documents backing each catalog entry. Selecting a template clones
//! one of these as the new document's starting content.

use crate::document::{
    BorderStyle, Education, Hobby, Project, ResumeDocument, WorkExperience,
};
use crate::templates::TemplateType;

fn s(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// The default blank starting point.
pub fn blank() -> ResumeDocument {
    ResumeDocument {
        title: s("CV của tôi"),
        color_hex: s("#000000"),
        border_style: BorderStyle::Square,
        template_type: TemplateType::Template0,
        ..ResumeDocument::default()
    }
}

/// "CV Chuyên nghiệp", a software engineer sample.
pub fn professional() -> ResumeDocument {
    ResumeDocument {
        title: s("CV Chuyên nghiệp"),
        first_name: s("Nguyễn"),
        last_name: s("Văn A"),
        job_title: s("Kỹ sư phần mềm"),
        city: s("Hà Nội"),
        country: s("Việt Nam"),
        email: s("example@email.com"),
        phone: s("0123456789"),
        summary: s(
            "Kỹ sư phần mềm với 5 năm kinh nghiệm trong phát triển web và mobile. \
             Thành thạo ReactJS, Node.js và các công nghệ hiện đại.",
        ),
        short_term_goals: s(
            "Phát triển kỹ năng quản lý dự án và trở thành team lead trong vòng 1-2 năm tới. \
             Tham gia các dự án với công nghệ mới để nâng cao kiến thức chuyên môn.",
        ),
        long_term_goals: s(
            "Hướng tới vị trí kỹ sư trưởng (Principal Engineer) trong 3-5 năm, đóng góp vào \
             các quyết định kiến trúc hệ thống và chiến lược công nghệ của công ty.",
        ),
        work_experiences: vec![
            WorkExperience {
                position: s("Senior Frontend Developer"),
                company: s("Tech Company X"),
                start_date: s("2021-01-01"),
                end_date: s("2023-12-31"),
                description: s(
                    "Phát triển và duy trì các ứng dụng web với ReactJS, Redux. \
                     Tối ưu hiệu suất và cải thiện trải nghiệm người dùng.",
                ),
            },
            WorkExperience {
                position: s("Web Developer"),
                company: s("Agency Y"),
                start_date: s("2018-06-01"),
                end_date: s("2020-12-31"),
                description: s(
                    "Xây dựng website cho khách hàng sử dụng HTML, CSS, JavaScript \
                     và các framework hiện đại.",
                ),
            },
        ],
        educations: vec![Education {
            degree: s("Kỹ sư Công nghệ thông tin"),
            major: None,
            school: s("Đại học Bách Khoa Hà Nội"),
            start_date: s("2014-09-01"),
            end_date: s("2018-05-31"),
        }],
        skills: strings(&[
            "HTML",
            "CSS",
            "JavaScript",
            "ReactJS",
            "Node.js",
            "Git",
            "Redux",
            "TypeScript",
        ]),
        color_hex: s("#7c3aed"),
        border_style: BorderStyle::Square,
        template_type: TemplateType::Template1,
        ..ResumeDocument::default()
    }
}

/// "CV Sáng tạo", a designer sample.
pub fn creative() -> ResumeDocument {
    ResumeDocument {
        title: s("CV Sáng tạo"),
        first_name: s("Trần"),
        last_name: s("Thị B"),
        job_title: s("UI/UX Designer"),
        city: s("Hồ Chí Minh"),
        country: s("Việt Nam"),
        email: s("design@email.com"),
        phone: s("0987654321"),
        summary: s(
            "Designer đam mê với 4 năm kinh nghiệm trong thiết kế UI/UX. Chuyên tạo ra \
             các trải nghiệm người dùng đẹp mắt và trực quan.",
        ),
        short_term_goals: s(
            "Nâng cao kỹ năng trong thiết kế hệ thống và animation. Tham gia các dự án \
             lớn để phát triển portfolio cá nhân trong 1-2 năm tới.",
        ),
        long_term_goals: s(
            "Trở thành Design Lead cho một team thiết kế và xây dựng các sản phẩm với \
             trải nghiệm người dùng xuất sắc. Đóng góp vào việc phát triển design system \
             cho các sản phẩm quy mô lớn.",
        ),
        work_experiences: vec![
            WorkExperience {
                position: s("Senior UI/UX Designer"),
                company: s("Creative Studio Z"),
                start_date: s("2020-03-01"),
                end_date: s("2023-12-31"),
                description: s(
                    "Thiết kế giao diện người dùng và trải nghiệm người dùng cho các ứng \
                     dụng web và mobile. Làm việc với các stakeholder để hiểu và đáp ứng \
                     yêu cầu.",
                ),
            },
            WorkExperience {
                position: s("Graphic Designer"),
                company: s("Marketing Agency W"),
                start_date: s("2018-01-01"),
                end_date: s("2020-02-28"),
                description: s(
                    "Thiết kế các tài liệu marketing, banner, logo và ấn phẩm cho khách hàng.",
                ),
            },
        ],
        educations: vec![Education {
            degree: s("Cử nhân Thiết kế Đồ họa"),
            major: None,
            school: s("Đại học Mỹ thuật TP.HCM"),
            start_date: s("2014-09-01"),
            end_date: s("2018-05-31"),
        }],
        skills: strings(&[
            "Figma",
            "Adobe XD",
            "Photoshop",
            "Illustrator",
            "UI Design",
            "UX Research",
            "Wireframing",
            "Prototyping",
        ]),
        color_hex: s("#a21caf"),
        border_style: BorderStyle::Squircle,
        template_type: TemplateType::Template2,
        ..ResumeDocument::default()
    }
}

/// "CV Tối giản", a project manager sample.
pub fn minimal() -> ResumeDocument {
    ResumeDocument {
        title: s("CV Tối giản"),
        first_name: s("Lê"),
        last_name: s("Văn C"),
        job_title: s("Project Manager"),
        city: s("Đà Nẵng"),
        country: s("Việt Nam"),
        email: s("manager@email.com"),
        phone: s("0369852147"),
        summary: s(
            "Quản lý dự án với hơn 7 năm kinh nghiệm trong lĩnh vực công nghệ. Chuyên môn \
             trong việc lập kế hoạch, triển khai và điều phối các dự án phát triển phần mềm \
             quy mô lớn. Kỹ năng mạnh về lãnh đạo, giao tiếp và quản lý thời gian, giúp đội \
             ngũ đạt hiệu suất tối đa. Kinh nghiệm làm việc với nhiều phương pháp luận như \
             Agile, Scrum, Waterfall.",
        ),
        short_term_goals: s(
            "Hoàn thành chứng chỉ PMP trong vòng 1 năm tới và áp dụng kiến thức mới vào \
             công việc. Tối ưu hóa quy trình quản lý dự án để tăng hiệu quả và giảm thời \
             gian hoàn thành.",
        ),
        long_term_goals: s(
            "Thăng tiến lên vị trí Director of Project Management trong vòng 5 năm, quản lý \
             nhiều nhóm dự án và tham gia vào việc định hướng chiến lược cho công ty.",
        ),
        work_experiences: vec![
            WorkExperience {
                position: s("Senior Project Manager"),
                company: s("Tech Solutions Corp"),
                start_date: s("2019-06-01"),
                end_date: s("2023-12-31"),
                description: s(
                    "• Quản lý 5+ dự án phát triển phần mềm quy mô lớn từ khâu lên ý tưởng \
                     đến triển khai sản phẩm\n• Điều phối đội ngũ 15 người gồm developers, \
                     designers và QA, tăng hiệu suất làm việc lên 30%\n• Triển khai phương \
                     pháp Agile/Scrum, cải thiện chu kỳ phát triển nhanh hơn 25%",
                ),
            },
            WorkExperience {
                position: s("Project Coordinator"),
                company: s("Digital Agency V"),
                start_date: s("2016-02-01"),
                end_date: s("2019-05-31"),
                description: s(
                    "• Hỗ trợ quản lý 10+ dự án web và mobile app cho các khách hàng doanh \
                     nghiệp\n• Lập kế hoạch, theo dõi tiến độ và báo cáo kết quả cho các bên \
                     liên quan\n• Tổ chức họp sprint planning, daily standup và retrospective \
                     theo phương pháp Scrum",
                ),
            },
            WorkExperience {
                position: s("Business Analyst"),
                company: s("Software Innovations Ltd"),
                start_date: s("2014-07-01"),
                end_date: s("2016-01-31"),
                description: s(
                    "• Phân tích yêu cầu kinh doanh và chuyển đổi thành đặc tả kỹ thuật\n\
                     • Tạo user stories, use cases và wireframes cho các tính năng phần mềm\n\
                     • Đào tạo người dùng về cách sử dụng phần mềm mới triển khai",
                ),
            },
        ],
        educations: vec![
            Education {
                degree: s("Thạc sĩ Quản trị Kinh doanh"),
                major: None,
                school: s("Đại học Kinh tế Đà Nẵng"),
                start_date: s("2014-09-01"),
                end_date: s("2016-05-31"),
            },
            Education {
                degree: s("Cử nhân Công nghệ Thông tin"),
                major: None,
                school: s("Đại học Đà Nẵng"),
                start_date: s("2010-09-01"),
                end_date: s("2014-05-31"),
            },
            Education {
                degree: s("Chứng chỉ Quản lý Dự án Chuyên nghiệp (PMP)"),
                major: None,
                school: s("Project Management Institute"),
                start_date: s("2018-01-01"),
                end_date: s("2018-03-15"),
            },
        ],
        skills: strings(&[
            "Quản lý dự án",
            "Agile/Scrum",
            "Kanban",
            "Jira",
            "MS Project",
            "Trello",
            "Asana",
            "Lãnh đạo",
            "Phân tích kinh doanh",
            "Quản lý rủi ro",
            "Đàm phán",
            "Lập kế hoạch",
            "Quản lý nguồn lực",
            "Báo cáo",
            "Office 365",
            "Tiếng Anh",
        ]),
        color_hex: s("#000000"),
        border_style: BorderStyle::Square,
        template_type: TemplateType::Template3,
        ..ResumeDocument::default()
    }
}

/// "CV Hiện đại", a modern layout sample with projects and hobbies.
pub fn modern() -> ResumeDocument {
    ResumeDocument {
        title: s("CV Hiện đại"),
        first_name: s("Trần"),
        last_name: s("Minh"),
        job_title: s("Kỹ sư Phần mềm"),
        city: s("Hà Nội"),
        country: s("Việt Nam"),
        email: s("minhtran@example.com"),
        phone: s("0912345678"),
        summary: s(
            "Kỹ sư phần mềm với 3 năm kinh nghiệm phát triển web. Có kiến thức vững về \
             ReactJS, Node.js và tối ưu hóa hiệu suất ứng dụng.",
        ),
        short_term_goals: s(
            "Phát triển sâu hơn về kiến trúc phần mềm và trở thành senior developer \
             trong 1-2 năm tới.",
        ),
        long_term_goals: s(
            "Định hướng trở thành solution architect và đóng góp vào các dự án mã nguồn \
             mở lớn.",
        ),
        work_experiences: vec![
            WorkExperience {
                position: s("Frontend Developer"),
                company: s("Tech Solutions"),
                start_date: s("2022-01-01"),
                end_date: s("2023-12-31"),
                description: s(
                    "• Phát triển và tối ưu các ứng dụng web sử dụng React và TypeScript\n\
                     • Cải thiện hiệu suất trang web, giảm 40% thời gian tải trang\n\
                     • Xây dựng UI component library cho toàn công ty",
                ),
            },
            WorkExperience {
                position: s("Web Developer"),
                company: s("Digital Agency"),
                start_date: s("2020-06-01"),
                end_date: s("2021-12-31"),
                description: s(
                    "• Xây dựng các website cho khách hàng sử dụng JavaScript và các \
                     framework hiện đại\n• Làm việc với team design để biến UI/UX mockup \
                     thành code hoạt động",
                ),
            },
        ],
        educations: vec![Education {
            degree: s("Kỹ sư Công nghệ thông tin"),
            major: None,
            school: s("Đại học Bách Khoa Hà Nội"),
            start_date: s("2016-09-01"),
            end_date: s("2020-05-31"),
        }],
        skills: strings(&[
            "JavaScript",
            "TypeScript",
            "ReactJS",
            "Next.js",
            "Node.js",
            "HTML/CSS",
            "Git",
            "REST API",
        ]),
        projects: vec![Project {
            name: s("Hệ thống quản lý kho"),
            role: s("Frontend Lead"),
            start_date: s("2023-02-01"),
            end_date: None,
            description: s(
                "Xây dựng giao diện quản lý tồn kho theo thời gian thực cho chuỗi bán lẻ.",
            ),
            tech_stack: strings(&["React", "TypeScript", "WebSocket"]),
        }],
        hobbies: vec![Hobby {
            name: s("Đọc sách"),
            description: s("Sách về công nghệ và phát triển bản thân."),
        }],
        color_hex: s("#1e7b77"),
        border_style: BorderStyle::Square,
        template_type: TemplateType::Template4,
        ..ResumeDocument::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_carry_their_own_template_type() {
        assert_eq!(blank().template_type, TemplateType::Template0);
        assert_eq!(professional().template_type, TemplateType::Template1);
        assert_eq!(creative().template_type, TemplateType::Template2);
        assert_eq!(minimal().template_type, TemplateType::Template3);
        assert_eq!(modern().template_type, TemplateType::Template4);
    }

    #[test]
    fn test_samples_have_no_persisted_id() {
        for doc in [blank(), professional(), creative(), minimal(), modern()] {
            assert_eq!(doc.id, None);
        }
    }

    #[test]
    fn test_sample_skills_are_already_normalized() {
        use crate::document::normalize_skills;
        for doc in [professional(), creative(), minimal(), modern()] {
            assert_eq!(normalize_skills(&doc.skills), doc.skills);
        }
    }
}
