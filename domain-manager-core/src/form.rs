//! 创建表单校验

use domain_manager_api::NewDomain;

use crate::error::ValidationError;

/// `domain` 字段为空时的提示
pub const DOMAIN_REQUIRED: &str = "Please enter a domain";

/// 校验创建表单输入
///
/// 去除首尾空白后不能为空；通过后返回待提交的 [`NewDomain`]。
pub fn validate_domain_input(input: &str) -> Result<NewDomain, ValidationError> {
    let domain = input.trim();
    if domain.is_empty() {
        return Err(ValidationError::new("domain", DOMAIN_REQUIRED));
    }
    Ok(NewDomain::new(domain))
}
