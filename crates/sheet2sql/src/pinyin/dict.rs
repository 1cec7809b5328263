//! Static lookup tables for column-name transliteration.
//!
//! `PHRASES` maps whole Chinese phrases to canonical English identifier
//! fragments; standard field names translate better than syllable-by-
//! syllable pinyin ("姓名" should become `Name`, not `XingMing`). Slice
//! order is the tie-break for equally long containment matches.
//!
//! `FALLBACK` is a minimal per-character pinyin table used only when the
//! phonetic engine produces nothing usable.

/// Whole-phrase mappings, first-defined order.
pub(crate) const PHRASES: &[(&str, &str)] = &[
    // Identity
    ("编号", "ID"),
    ("序号", "SeqNo"),
    ("标识", "ID"),
    ("主键", "ID"),
    // People
    ("姓名", "Name"),
    ("名称", "Name"),
    ("用户名", "Username"),
    ("昵称", "Nickname"),
    ("年龄", "Age"),
    ("性别", "Gender"),
    ("生日", "Birthday"),
    ("出生日期", "Birthday"),
    // Contact
    ("电话", "Phone"),
    ("手机", "Mobile"),
    ("手机号", "Mobile"),
    ("电话号码", "PhoneNumber"),
    ("邮箱", "Email"),
    ("邮件", "Email"),
    ("地址", "Address"),
    ("邮编", "ZipCode"),
    ("邮政编码", "PostalCode"),
    // Time
    ("日期", "Date"),
    ("时间", "Time"),
    ("创建时间", "CreateTime"),
    ("创建日期", "CreateDate"),
    ("修改时间", "UpdateTime"),
    ("更新时间", "UpdateTime"),
    ("删除时间", "DeleteTime"),
    ("开始时间", "StartTime"),
    ("结束时间", "EndTime"),
    ("入职日期", "HireDate"),
    ("离职日期", "LeaveDate"),
    // Organization
    ("公司", "Company"),
    ("部门", "Department"),
    ("职位", "Position"),
    ("岗位", "Position"),
    ("职务", "Title"),
    ("职称", "Title"),
    ("级别", "Level"),
    ("等级", "Grade"),
    // Finance
    ("金额", "Amount"),
    ("价格", "Price"),
    ("单价", "UnitPrice"),
    ("总价", "TotalPrice"),
    ("费用", "Fee"),
    ("工资", "Salary"),
    ("薪资", "Salary"),
    ("奖金", "Bonus"),
    ("收入", "Income"),
    ("支出", "Expense"),
    ("余额", "Balance"),
    // Quantities
    ("数量", "Quantity"),
    ("数目", "Count"),
    ("总数", "Total"),
    ("库存", "Stock"),
    ("重量", "Weight"),
    // Status
    ("状态", "Status"),
    ("类型", "Type"),
    ("类别", "Category"),
    ("分类", "Category"),
    ("标签", "Tag"),
    ("标记", "Flag"),
    // Descriptions
    ("备注", "Remark"),
    ("说明", "Description"),
    ("描述", "Description"),
    ("注释", "Comment"),
    ("内容", "Content"),
    ("详情", "Detail"),
    // Business
    ("客户", "Customer"),
    ("供应商", "Supplier"),
    ("产品", "Product"),
    ("商品", "Product"),
    ("订单", "Order"),
    ("订单号", "OrderNo"),
    ("合同", "Contract"),
    ("项目", "Project"),
    // Accounts
    ("账号", "Account"),
    ("密码", "Password"),
    ("令牌", "Token"),
    // Misc
    ("图片", "Image"),
    ("照片", "Photo"),
    ("文件", "File"),
    ("链接", "Link"),
    ("网址", "URL"),
    ("代码", "Code"),
    ("编码", "Code"),
    ("排序", "Sort"),
    ("排序号", "SortOrder"),
    ("是否", "IsFlag"),
    ("启用", "Enabled"),
    ("禁用", "Disabled"),
    ("删除", "Deleted"),
];

/// Minimal per-character pinyin table, last-resort fallback.
pub(crate) const FALLBACK: &[(char, &str)] = &[
    ('姓', "Xing"),
    ('名', "Ming"),
    ('年', "Nian"),
    ('龄', "Ling"),
    ('性', "Xing"),
    ('别', "Bie"),
    ('地', "Di"),
    ('址', "Zhi"),
    ('电', "Dian"),
    ('话', "Hua"),
    ('邮', "You"),
    ('箱', "Xiang"),
    ('编', "Bian"),
    ('号', "Hao"),
    ('日', "Ri"),
    ('期', "Qi"),
    ('时', "Shi"),
    ('间', "Jian"),
    ('金', "Jin"),
    ('额', "E"),
    ('数', "Shu"),
    ('量', "Liang"),
    ('价', "Jia"),
    ('格', "Ge"),
    ('单', "Dan"),
    ('位', "Wei"),
    ('部', "Bu"),
    ('门', "Men"),
    ('职', "Zhi"),
    ('务', "Wu"),
    ('工', "Gong"),
    ('资', "Zi"),
    ('产', "Chan"),
    ('品', "Pin"),
    ('订', "Ding"),
    ('项', "Xiang"),
    ('目', "Mu"),
    ('客', "Ke"),
    ('户', "Hu"),
    ('供', "Gong"),
    ('应', "Ying"),
    ('商', "Shang"),
    ('备', "Bei"),
    ('注', "Zhu"),
    ('描', "Miao"),
    ('述', "Shu"),
    ('说', "Shuo"),
    ('明', "Ming"),
    ('类', "Lei"),
    ('型', "Xing"),
    ('状', "Zhuang"),
    ('态', "Tai"),
    ('码', "Ma"),
    ('员', "Yuan"),
    ('人', "Ren"),
    ('成', "Cheng"),
    ('本', "Ben"),
    ('利', "Li"),
    ('润', "Run"),
    ('收', "Shou"),
    ('入', "Ru"),
    ('支', "Zhi"),
    ('出', "Chu"),
    ('余', "Yu"),
    ('月', "Yue"),
    ('省', "Sheng"),
    ('市', "Shi"),
    ('区', "Qu"),
    ('县', "Xian"),
    ('镇', "Zhen"),
    ('街', "Jie"),
    ('道', "Dao"),
    ('公', "Gong"),
    ('司', "Si"),
    ('企', "Qi"),
    ('业', "Ye"),
    ('行', "Hang"),
    ('银', "Yin"),
    ('账', "Zhang"),
    ('卡', "Ka"),
    ('信', "Xin"),
    ('用', "Yong"),
    ('积', "Ji"),
    ('分', "Fen"),
    ('等', "Deng"),
    ('级', "Ji"),
    ('会', "Hui"),
    ('费', "Fei"),
    ('发', "Fa"),
    ('票', "Piao"),
    ('税', "Shui"),
    ('率', "Lv"),
    ('折', "Zhe"),
    ('扣', "Kou"),
    ('优', "You"),
    ('惠', "Hui"),
    ('活', "Huo"),
    ('动', "Dong"),
    ('始', "Shi"),
    ('结', "Jie"),
    ('束', "Shu"),
    ('开', "Kai"),
    ('关', "Guan"),
    ('创', "Chuang"),
    ('建', "Jian"),
    ('更', "Geng"),
    ('新', "Xin"),
    ('修', "Xiu"),
    ('改', "Gai"),
    ('删', "Shan"),
    ('除', "Chu"),
    ('增', "Zeng"),
    ('加', "Jia"),
    ('减', "Jian"),
    ('少', "Shao"),
    ('总', "Zong"),
    ('计', "Ji"),
    ('平', "Ping"),
    ('均', "Jun"),
    ('最', "Zui"),
    ('大', "Da"),
    ('小', "Xiao"),
    ('高', "Gao"),
    ('低', "Di"),
    ('长', "Chang"),
    ('短', "Duan"),
    ('宽', "Kuan"),
    ('窄', "Zhai"),
    ('厚', "Hou"),
    ('薄', "Bao"),
    ('重', "Zhong"),
    ('轻', "Qing"),
    ('快', "Kuai"),
    ('慢', "Man"),
    ('多', "Duo"),
    ('好', "Hao"),
    ('坏', "Huai"),
    ('正', "Zheng"),
    ('常', "Chang"),
    ('异', "Yi"),
    ('有', "You"),
    ('无', "Wu"),
    ('是', "Shi"),
    ('否', "Fou"),
    ('真', "Zhen"),
    ('假', "Jia"),
    ('男', "Nan"),
    ('女', "Nv"),
    ('老', "Lao"),
    ('幼', "You"),
    ('中', "Zhong"),
    ('外', "Wai"),
    ('内', "Nei"),
    ('上', "Shang"),
    ('下', "Xia"),
    ('左', "Zuo"),
    ('右', "You"),
    ('前', "Qian"),
    ('后', "Hou"),
    ('东', "Dong"),
    ('西', "Xi"),
    ('南', "Nan"),
    ('北', "Bei"),
];

/// Look up a character in the fallback table.
pub(crate) fn fallback_syllable(c: char) -> Option<&'static str> {
    FALLBACK.iter().find(|(ch, _)| *ch == c).map(|(_, py)| *py)
}
