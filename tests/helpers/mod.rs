// ==========================================
// 集成测试共享工具
// ==========================================

#![allow(dead_code)]

pub mod mock_config;

/// 相对误差断言（绝对值很小时退化为绝对误差）
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tol * scale,
        "expected {} ≈ {} (tol {})",
        actual,
        expected,
        tol
    );
}

/// 默认容差
pub const REL_TOL: f64 = 1e-6;
