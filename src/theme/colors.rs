//! 主题颜色定义

use ratatui::style::Color;

use super::ThemeColors;

/// 深色主题（默认）
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),           // 深灰背景
        bg_secondary: Color::Rgb(48, 48, 48), // 选中行背景
        logo: Color::Rgb(0, 255, 136),        // 亮绿色
        highlight: Color::Rgb(0, 255, 136),   // 亮绿色
        text: Color::White,
        muted: Color::Rgb(128, 128, 128), // 灰色
        border: Color::Rgb(68, 68, 68),   // 深灰边框
        status_done: Color::Rgb(0, 255, 136),
        status_open: Color::Rgb(128, 128, 128),
    }
}

/// 浅色主题
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(250, 250, 250),           // 浅灰背景
        bg_secondary: Color::Rgb(230, 230, 230), // 选中行背景
        logo: Color::Rgb(0, 128, 68),            // 深绿色
        highlight: Color::Rgb(0, 128, 68),
        text: Color::Rgb(30, 30, 30), // 深灰文字
        muted: Color::Rgb(120, 120, 120),
        border: Color::Rgb(200, 200, 200),
        status_done: Color::Rgb(0, 150, 80),
        status_open: Color::Rgb(140, 140, 140),
    }
}

/// Dracula 主题
pub fn dracula_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(40, 42, 54),
        bg_secondary: Color::Rgb(68, 71, 90),
        logo: Color::Rgb(189, 147, 249),      // 紫色
        highlight: Color::Rgb(255, 121, 198), // 粉色
        text: Color::Rgb(248, 248, 242),
        muted: Color::Rgb(98, 114, 164),
        border: Color::Rgb(68, 71, 90),
        status_done: Color::Rgb(80, 250, 123), // 绿色
        status_open: Color::Rgb(98, 114, 164),
    }
}

/// Nord 主题
pub fn nord_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(46, 52, 64),
        bg_secondary: Color::Rgb(59, 66, 82),
        logo: Color::Rgb(136, 192, 208),      // 冰蓝色
        highlight: Color::Rgb(136, 192, 208),
        text: Color::Rgb(236, 239, 244),
        muted: Color::Rgb(106, 118, 138),
        border: Color::Rgb(67, 76, 94),
        status_done: Color::Rgb(163, 190, 140), // 绿色
        status_open: Color::Rgb(106, 118, 138),
    }
}

/// Gruvbox 主题
pub fn gruvbox_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(40, 40, 40),
        bg_secondary: Color::Rgb(60, 56, 54),
        logo: Color::Rgb(184, 187, 38),      // 黄绿色
        highlight: Color::Rgb(250, 189, 47), // 黄色
        text: Color::Rgb(235, 219, 178),
        muted: Color::Rgb(146, 131, 116),
        border: Color::Rgb(80, 73, 69),
        status_done: Color::Rgb(184, 187, 38),
        status_open: Color::Rgb(146, 131, 116),
    }
}
